//! Certificates of shortest-path outcomes and their validators.
//!
//! The solver never asks the caller to trust it: a [`Witness`] either
//! carries a shortest-path tree whose distance vector can be checked edge by
//! edge, or a negative cycle whose weight can be summed, or it is `Unknown`
//! and the caller retries with a larger budget or another seed.

use crate::graph::{EdgeIndex, Graph, VertexIndex};
use crate::measure::Measure;

/// A shortest-path tree over some (implicit) source set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<W> {
    /// Reduced distance per vertex; `W::MAX` marks unreachable vertices.
    pub dist: Vec<W>,
    /// The edge that last relaxed each vertex; `None` for roots and for
    /// unreachable vertices.
    pub parent_edge: Vec<Option<EdgeIndex>>,
    /// Distance under raw weights (potentials ignored), reconstructed by
    /// [`validate`](ShortestPathTree::validate). Empty until then.
    pub pure_dist: Vec<W>,
}

/// A closed chain of edges whose raw weights sum to a negative value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCycle {
    pub edges: Vec<EdgeIndex>,
}

/// Outcome of a shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Witness<W> {
    /// No certificate: the budget ran out or a randomized round failed.
    /// Callers may retry with a larger budget or a different seed.
    Unknown,
    ShortestPathTree(ShortestPathTree<W>),
    NegativeCycle(NegativeCycle),
}

impl<W: Measure> ShortestPathTree<W> {
    pub fn new(dist: Vec<W>, parent_edge: Vec<Option<EdgeIndex>>) -> Self {
        ShortestPathTree {
            dist,
            parent_edge,
            pure_dist: Vec::new(),
        }
    }

    /// Check the tree against `g` and reconstruct [`pure_dist`].
    ///
    /// The distance vector must satisfy the relaxed triangle inequality on
    /// every non-deleted edge. The parent edges must form an in-tree whose
    /// reachable set is exactly the set of vertices with finite distance;
    /// walking that tree from its roots with *raw* edge weights yields the
    /// pure distances.
    ///
    /// [`pure_dist`]: ShortestPathTree::pure_dist
    pub fn validate(&mut self, g: &Graph<W>) -> bool {
        let n = g.vertex_count();
        if self.dist.len() != n || self.parent_edge.len() != n {
            return false;
        }
        if !validate_distances(g, &self.dist) {
            return false;
        }

        let mut children: Vec<Vec<(VertexIndex, EdgeIndex)>> = vec![Vec::new(); n];
        let mut roots = Vec::new();
        for v in 0..n {
            match self.parent_edge[v] {
                Some(e) => {
                    if e >= g.edge_count() || g.edge(e).target != v {
                        return false;
                    }
                    if self.dist[g.edge(e).source] == W::MAX {
                        return false;
                    }
                    children[g.edge(e).source].push((v, e));
                }
                None => {
                    if self.dist[v] != W::MAX {
                        roots.push(v);
                    }
                }
            }
        }

        let mut pure = vec![W::MAX; n];
        for &root in &roots {
            pure[root] = W::ZERO;
        }
        let mut stack = roots;
        while let Some(v) = stack.pop() {
            for &(child, e) in &children[v] {
                pure[child] = pure[v] + g.edge(e).weight;
                stack.push(child);
            }
        }

        // Reachability through the tree must agree with the distance vector;
        // this also rejects parent chains that loop instead of reaching a
        // root.
        for v in 0..n {
            if (pure[v] == W::MAX) != (self.dist[v] == W::MAX) {
                return false;
            }
        }

        self.pure_dist = pure;
        true
    }
}

impl<W: Measure> Witness<W> {
    /// Validate the certificate against `g`. `Unknown` never validates.
    pub fn validate(&mut self, g: &Graph<W>) -> bool {
        match self {
            Witness::Unknown => false,
            Witness::ShortestPathTree(tree) => tree.validate(g),
            Witness::NegativeCycle(cycle) => validate_negative_cycle(g, &cycle.edges),
        }
    }

    pub fn shortest_path_tree(&self) -> Option<&ShortestPathTree<W>> {
        match self {
            Witness::ShortestPathTree(tree) => Some(tree),
            _ => None,
        }
    }
}

/// Check the relaxed triangle inequality `dist[target] <= dist[source] +
/// weight(e)` for every non-deleted edge with a reachable source.
///
/// Once this is broken, the distance vector is not a shortest-path tree for
/// the current potentials; persistent breakage indicates a negative cycle.
pub fn validate_distances<W: Measure>(g: &Graph<W>, dist: &[W]) -> bool {
    for e in 0..g.edge_count() {
        if g.deleted_edge(e) {
            continue;
        }
        let edge = g.edge(e);
        if g.deleted_vertex(edge.source) || g.deleted_vertex(edge.target) {
            continue;
        }
        if dist[edge.source] == W::MAX {
            continue;
        }
        if dist[edge.target] > dist[edge.source] + g.weight(e) {
            return false;
        }
    }
    true
}

/// Check that `cycle` chains back onto itself and that its raw weight is
/// strictly negative.
pub fn validate_negative_cycle<W: Measure>(g: &Graph<W>, cycle: &[EdgeIndex]) -> bool {
    let Some(&last) = cycle.last() else {
        return false;
    };
    let mut previous_target = g.edge(last).target;
    let mut total = W::ZERO;
    for &e in cycle {
        let edge = g.edge(e);
        if edge.source != previous_target {
            return false;
        }
        previous_target = edge.target;
        total = total + edge.weight;
    }
    total < W::ZERO
}
