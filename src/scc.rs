//! Kosaraju decomposition with two-way vertex and edge index maps.

use fixedbitset::FixedBitSet;

use crate::graph::{EdgeIndex, Graph, VertexIndex};
use crate::measure::Measure;

/// Where a global edge ended up in a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLocation {
    /// Intra-component edge; `local` indexes into `subgraph(scc)`.
    Intra { scc: usize, local: EdgeIndex },
    /// Crossing edge; `local` indexes into the inter-SCC DAG.
    Inter { local: EdgeIndex },
}

/// Strongly connected components of a graph, with one owned subgraph per
/// component and maps between global and local indexing.
///
/// Component indices are assigned in topological order of the condensation,
/// sources first; the potential bookkeeping in the restricted solver relies
/// on this orientation. Soft-deleted vertices and edges are ignored: a
/// deleted vertex has no component and a deleted edge lands in no container.
///
/// This implementation is iterative and does two passes over the vertices.
///
/// # Example
///
/// ```
/// use negative_sssp::{Graph, SccDecomposition};
///
/// let mut g: Graph<i64> = Graph::new(4);
/// g.add_edge(0, 1, 1);
/// g.add_edge(1, 0, 1);
/// g.add_edge(1, 2, 1);
/// g.add_edge(2, 3, 1);
/// g.add_edge(3, 2, 1);
///
/// let decomp = SccDecomposition::new(&g);
/// assert_eq!(decomp.num_sccs(), 2);
/// assert!(decomp.in_same_scc(0, 1));
/// assert!(!decomp.in_same_scc(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct SccDecomposition<W> {
    subgraphs: Vec<Graph<W>>,
    inter_scc: Graph<W>,
    vertex_up: Vec<Vec<VertexIndex>>,
    vertex_down: Vec<Option<(usize, VertexIndex)>>,
    edge_down: Vec<Option<EdgeLocation>>,
}

impl<W: Measure> SccDecomposition<W> {
    pub fn new(g: &Graph<W>) -> Self {
        let n = g.vertex_count();

        // First pass: forward DFS for finish times, building a scratch
        // reverse adjacency (vertex-keyed, non-deleted edges only) along the
        // way. Explicit stack; the graphs this runs on can be deep.
        let mut discovered = FixedBitSet::with_capacity(n);
        let mut finish_order = Vec::with_capacity(n);
        let mut scratch_radj: Vec<Vec<VertexIndex>> = vec![Vec::new(); n];
        for start in 0..n {
            if g.deleted_vertex(start) || discovered.contains(start) {
                continue;
            }
            discovered.insert(start);
            let mut stack: Vec<(VertexIndex, usize)> = vec![(start, 0)];
            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                let pos = frame.1;
                if pos == g.deg(v) {
                    finish_order.push(v);
                    stack.pop();
                    continue;
                }
                frame.1 += 1;
                let e = g.out_edges(v)[pos];
                if g.deleted_edge(e) {
                    continue;
                }
                let target = g.edge(e).target;
                if g.deleted_vertex(target) {
                    continue;
                }
                scratch_radj[target].push(v);
                if !discovered.contains(target) {
                    discovered.insert(target);
                    stack.push((target, 0));
                }
            }
        }

        // Second pass: in reverse finish order, every unassigned root opens
        // a component and collects everything it reaches in the reverse
        // adjacency.
        let mut subgraphs: Vec<Graph<W>> = Vec::new();
        let mut vertex_up: Vec<Vec<VertexIndex>> = Vec::new();
        let mut vertex_down: Vec<Option<(usize, VertexIndex)>> = vec![None; n];
        let mut stack = Vec::new();
        for &root in finish_order.iter().rev() {
            if vertex_down[root].is_some() {
                continue;
            }
            let scc = subgraphs.len();
            subgraphs.push(Graph::new_scc(0));
            vertex_up.push(Vec::new());
            vertex_down[root] = Some((scc, 0));
            vertex_up[scc].push(root);
            subgraphs[scc].add_vertex(W::ZERO);
            stack.push(root);
            while let Some(v) = stack.pop() {
                for &u in &scratch_radj[v] {
                    if vertex_down[u].is_some() {
                        continue;
                    }
                    let local = vertex_up[scc].len();
                    vertex_down[u] = Some((scc, local));
                    vertex_up[scc].push(u);
                    subgraphs[scc].add_vertex(W::ZERO);
                    stack.push(u);
                }
            }
        }

        // Distribute the edges. Subgraphs carry the reduced weight at
        // decomposition time against their own zero potentials.
        let mut inter_scc = Graph::new(n);
        let mut edge_down = Vec::with_capacity(g.edge_count());
        for e in 0..g.edge_count() {
            if g.deleted_edge(e) {
                edge_down.push(None);
                continue;
            }
            let edge = g.edge(e);
            let (Some((source_scc, source_local)), Some((target_scc, target_local))) =
                (vertex_down[edge.source], vertex_down[edge.target])
            else {
                edge_down.push(None);
                continue;
            };
            let w = g.weight(e);
            if source_scc == target_scc {
                let local = subgraphs[source_scc].add_edge(source_local, target_local, w);
                edge_down.push(Some(EdgeLocation::Intra {
                    scc: source_scc,
                    local,
                }));
            } else {
                let local = inter_scc.add_edge(edge.source, edge.target, w);
                edge_down.push(Some(EdgeLocation::Inter { local }));
            }
        }

        SccDecomposition {
            subgraphs,
            inter_scc,
            vertex_up,
            vertex_down,
            edge_down,
        }
    }

    pub fn num_sccs(&self) -> usize {
        self.subgraphs.len()
    }

    pub fn subgraph(&self, scc: usize) -> &Graph<W> {
        &self.subgraphs[scc]
    }

    /// Move a subgraph out of the decomposition, leaving an empty graph in
    /// its place. The index maps stay intact.
    pub fn take_subgraph(&mut self, scc: usize) -> Graph<W> {
        core::mem::replace(&mut self.subgraphs[scc], Graph::new(0))
    }

    /// The DAG of crossing edges, over the original vertex numbering.
    pub fn inter_scc(&self) -> &Graph<W> {
        &self.inter_scc
    }

    /// Global index of a component-local vertex.
    pub fn vertex_up(&self, scc: usize, local: VertexIndex) -> VertexIndex {
        self.vertex_up[scc][local]
    }

    /// Global indices of a component's vertices, in local order.
    pub fn component_vertices(&self, scc: usize) -> &[VertexIndex] {
        &self.vertex_up[scc]
    }

    /// Component and local index of a global vertex, `None` if it was
    /// deleted.
    pub fn vertex_down(&self, v: VertexIndex) -> Option<(usize, VertexIndex)> {
        self.vertex_down[v]
    }

    pub fn in_same_scc(&self, u: VertexIndex, v: VertexIndex) -> bool {
        match (self.vertex_down[u], self.vertex_down[v]) {
            (Some((scc_u, _)), Some((scc_v, _))) => scc_u == scc_v,
            _ => false,
        }
    }

    /// Where a global edge ended up, `None` if it was deleted.
    pub fn edge_location(&self, e: EdgeIndex) -> Option<EdgeLocation> {
        self.edge_down[e]
    }
}
