//! The lazy Dijkstra of Bernstein, Chechik and Fineman: alternating
//! Dijkstra and Bellman-Ford phases.
//!
//! Each outer iteration first drains the priority queue along non-negative
//! reduced edges, then sweeps every negative reduced edge once, re-enqueuing
//! whatever it improves. With kappa at least one more than the number of
//! negative edges on any shortest path, and no negative cycle, the result is
//! exact, at roughly the cost of kappa Dijkstra runs instead of the
//! vertex-count many rounds of Bellman-Ford.

use std::collections::BinaryHeap;

use crate::capper::OperationCapper;
use crate::graph::{EdgeIndex, Graph, VertexIndex};
use crate::measure::Measure;
use crate::scored::MinScored;
use crate::witness::{validate_distances, ShortestPathTree};

use super::dijkstra::relax_non_negative;

/// The funnel routine: lazy Dijkstra from a caller-provided distance vector.
///
/// Every vertex with a finite initial distance enters the queue as a
/// potential root. Consumes one capper increment per outer iteration; on an
/// exhausted budget the partial tree is returned and will not validate as a
/// shortest-path tree unless it happens to be complete.
///
/// # Panics
///
/// With `validate` set, panics if the result violates the distance
/// inequality; for a caller that asserted enough slack, that means a
/// negative cycle or a plain bug.
pub fn predetermined<W: Measure>(
    g: &Graph<W>,
    init_dist: Vec<W>,
    kappa: usize,
    validate: bool,
    capper: &mut OperationCapper,
) -> ShortestPathTree<W> {
    let n = g.vertex_count();
    let mut dist = init_dist;
    let mut parent: Vec<Option<EdgeIndex>> = vec![None; n];
    let mut queue = BinaryHeap::new();
    for v in 0..n {
        if g.deleted_vertex(v) || dist[v] == W::MAX {
            continue;
        }
        queue.push(MinScored(dist[v], v));
    }

    let mut rounds = 0;
    while rounds < kappa && !queue.is_empty() {
        if !capper.incr(1) {
            break;
        }

        // Dijkstra phase.
        relax_non_negative(g, &mut queue, &mut dist, &mut parent);

        // Bellman-Ford phase: negative reduced edges only.
        for e in 0..g.edge_count() {
            if g.deleted_edge(e) {
                continue;
            }
            let w = g.weight(e);
            if w >= W::ZERO {
                continue;
            }
            let edge = g.edge(e);
            if g.deleted_vertex(edge.source) || g.deleted_vertex(edge.target) {
                continue;
            }
            if dist[edge.source] == W::MAX {
                continue;
            }
            let next = dist[edge.source] + w;
            if dist[edge.target] > next {
                dist[edge.target] = next;
                parent[edge.target] = Some(e);
                queue.push(MinScored(next, edge.target));
            }
        }

        rounds += 1;
    }

    let tree = ShortestPathTree::new(dist, parent);
    if validate {
        assert!(
            validate_distances(g, &tree.dist),
            "lazy dijkstra failed to converge: negative cycle or insufficient kappa"
        );
    }
    tree
}

/// Lazy Dijkstra from a set of sources, all at distance zero.
pub fn multi_source<W: Measure>(
    g: &Graph<W>,
    sources: &[VertexIndex],
    kappa: usize,
    validate: bool,
    capper: &mut OperationCapper,
) -> ShortestPathTree<W> {
    let mut init = g.initial_dist();
    for &s in sources {
        if !g.deleted_vertex(s) {
            init[s] = W::ZERO;
        }
    }
    predetermined(g, init, kappa, validate, capper)
}

/// Lazy Dijkstra from a single source.
///
/// # Example
///
/// ```
/// use negative_sssp::algo::{bellman_ford, lazy_dijkstra};
/// use negative_sssp::{Graph, OperationCapper};
///
/// let mut g: Graph<i64> = Graph::new(4);
/// g.add_edge(0, 1, 2);
/// g.add_edge(1, 2, -3);
/// g.add_edge(2, 3, 1);
///
/// // One negative edge per shortest path, so a slack of 2 is enough.
/// let tree = lazy_dijkstra::single_source(&g, 0, 2, false, &mut OperationCapper::nocap());
/// assert_eq!(tree.dist, vec![0, 2, -1, 0]);
/// assert_eq!(tree.dist, bellman_ford::single_source(&g, 0));
/// ```
pub fn single_source<W: Measure>(
    g: &Graph<W>,
    source: VertexIndex,
    kappa: usize,
    validate: bool,
    capper: &mut OperationCapper,
) -> ShortestPathTree<W> {
    multi_source(g, &[source], kappa, validate, capper)
}

/// Lazy Dijkstra with every vertex as a source.
pub fn all_source<W: Measure>(
    g: &Graph<W>,
    kappa: usize,
    validate: bool,
    capper: &mut OperationCapper,
) -> ShortestPathTree<W> {
    let init = (0..g.vertex_count())
        .map(|v| {
            if g.deleted_vertex(v) {
                W::MAX
            } else {
                W::ZERO
            }
        })
        .collect();
    predetermined(g, init, kappa, validate, capper)
}

/// Lazy Dijkstra from a virtual source with an edge of weight `phi[v]` into
/// every vertex: the initial distance is `-phi[v]`.
///
/// This is the reconcile step of the restricted solver. After the potential
/// update has encoded the per-component trees and the condensation order
/// into phi, one artificial-source pass stitches the components' distances
/// together.
pub fn artificial_source<W: Measure>(
    g: &Graph<W>,
    kappa: usize,
    validate: bool,
    capper: &mut OperationCapper,
) -> ShortestPathTree<W> {
    let init = (0..g.vertex_count())
        .map(|v| {
            if g.deleted_vertex(v) {
                W::MAX
            } else {
                -g.potential(v)
            }
        })
        .collect();
    predetermined(g, init, kappa, validate, capper)
}
