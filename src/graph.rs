//! Directed graph with integer edge weights, vertex potentials and
//! transient soft deletion.

use fixedbitset::FixedBitSet;

use crate::measure::Measure;

/// Index of a vertex in a [`Graph`].
pub type VertexIndex = usize;
/// Index of an edge in a [`Graph`]. Edge indices are stable: soft deletion
/// hides an edge without renumbering the others.
pub type EdgeIndex = usize;

/// A directed weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub source: VertexIndex,
    pub target: VertexIndex,
    pub weight: W,
}

/// Directed graph with a per-vertex potential function.
///
/// Every shortest-path primitive in this crate sees the *reduced* weight of
/// an edge, `weight + phi[source] - phi[target]`. Adjusting potentials
/// rescales path costs without touching the edge records, and leaves the
/// weight of every cycle unchanged; this is what lets the scaling driver
/// shrink negative weights one pass at a time.
///
/// The graph also carries a soft-deletion facility used by the restricted
/// solver's ball carving: while deletions are enabled, primitives treat
/// deleted vertices and edges as absent, but the underlying adjacency is
/// never rewritten. Deletion state is transient to a single solver call.
///
/// # Example
///
/// ```
/// use negative_sssp::Graph;
///
/// let mut g: Graph<i64> = Graph::new(3);
/// g.add_edge(0, 1, 4);
/// g.add_edge(1, 2, -1);
/// assert_eq!(g.min_weight(), -1);
///
/// // Raising a vertex's potential makes it cheaper to reach and more
/// // expensive to leave; cycle weights never change.
/// g.set_potential(1, 2);
/// assert_eq!(g.weight(0), 2);
/// assert_eq!(g.weight(1), 1);
/// assert!(g.is_restricted());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<W> {
    phi: Vec<W>,
    edges: Vec<Edge<W>>,
    adj: Vec<Vec<EdgeIndex>>,
    radj: Vec<Vec<EdgeIndex>>,
    /// Marks the graph as known strongly connected. The restricted solver
    /// refuses graphs without the mark; it is an assertion by the caller,
    /// not a computed property.
    pub is_scc: bool,
    delv: FixedBitSet,
    dele: FixedBitSet,
    use_dels: bool,
}

impl<W: Measure> Graph<W> {
    /// Create a graph with `n` vertices, zero potentials and no edges.
    pub fn new(n: usize) -> Self {
        Graph {
            phi: vec![W::ZERO; n],
            edges: Vec::new(),
            adj: vec![Vec::new(); n],
            radj: vec![Vec::new(); n],
            is_scc: false,
            delv: FixedBitSet::with_capacity(n),
            dele: FixedBitSet::with_capacity(0),
            use_dels: false,
        }
    }

    /// Like [`new`](Graph::new), but marked strongly connected.
    pub fn new_scc(n: usize) -> Self {
        let mut g = Graph::new(n);
        g.is_scc = true;
        g
    }

    pub fn vertex_count(&self) -> usize {
        self.phi.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Out-degree of `v`, deleted edges included.
    pub fn deg(&self, v: VertexIndex) -> usize {
        self.adj[v].len()
    }

    /// Append a vertex with the given potential.
    pub fn add_vertex(&mut self, phi: W) {
        self.phi.push(phi);
        self.adj.push(Vec::new());
        self.radj.push(Vec::new());
        self.delv.grow(self.phi.len());
    }

    /// Append a directed edge and return its index.
    ///
    /// # Panics
    ///
    /// Panics if `source` or `target` is not a vertex of the graph.
    pub fn add_edge(&mut self, source: VertexIndex, target: VertexIndex, weight: W) -> EdgeIndex {
        assert!(
            source < self.vertex_count() && target < self.vertex_count(),
            "edge ({}, {}) out of range for a graph of {} vertices",
            source,
            target,
            self.vertex_count()
        );
        let index = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        self.adj[source].push(index);
        self.radj[target].push(index);
        self.dele.grow(index + 1);
        index
    }

    pub fn edge(&self, e: EdgeIndex) -> &Edge<W> {
        &self.edges[e]
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Indices of the edges leaving `v`, deleted edges included.
    pub fn out_edges(&self, v: VertexIndex) -> &[EdgeIndex] {
        &self.adj[v]
    }

    /// Indices of the edges entering `v`, deleted edges included.
    pub fn in_edges(&self, v: VertexIndex) -> &[EdgeIndex] {
        &self.radj[v]
    }

    pub fn potential(&self, v: VertexIndex) -> W {
        self.phi[v]
    }

    pub fn potentials(&self) -> &[W] {
        &self.phi
    }

    pub fn set_potential(&mut self, v: VertexIndex, phi: W) {
        self.phi[v] = phi;
    }

    pub fn add_potential(&mut self, v: VertexIndex, delta: W) {
        self.phi[v] = self.phi[v] + delta;
    }

    /// Multiply every edge weight and every potential by `factor`.
    pub fn scale_weights(&mut self, factor: W) {
        for phi in &mut self.phi {
            *phi = *phi * factor;
        }
        for edge in &mut self.edges {
            edge.weight = edge.weight * factor;
        }
    }

    /// Reduced weight of edge `e`: `weight + phi[source] - phi[target]`.
    pub fn weight(&self, e: EdgeIndex) -> W {
        let edge = &self.edges[e];
        edge.weight + self.phi[edge.source] - self.phi[edge.target]
    }

    /// Minimum reduced weight over the non-deleted edges, or `W::MAX` when
    /// there is none.
    pub fn min_weight(&self) -> W {
        let mut min = W::MAX;
        for e in 0..self.edges.len() {
            if self.deleted_edge(e) {
                continue;
            }
            let w = self.weight(e);
            if w < min {
                min = w;
            }
        }
        min
    }

    /// Whether every reduced edge weight is at least -1.
    pub fn is_restricted(&self) -> bool {
        self.min_weight() >= -W::ONE
    }

    /// A distance vector with every vertex unreachable.
    pub fn initial_dist(&self) -> Vec<W> {
        vec![W::MAX; self.vertex_count()]
    }

    /// A deep copy with every edge reversed and the adjacency lists swapped.
    /// Edge indices are preserved.
    pub fn transpose(&self) -> Self {
        let mut gt = self.clone();
        core::mem::swap(&mut gt.adj, &mut gt.radj);
        for edge in &mut gt.edges {
            core::mem::swap(&mut edge.source, &mut edge.target);
        }
        gt
    }

    /// Start interpreting the deletion sets. Both sets are empty until
    /// [`delete_vertex`](Graph::delete_vertex) or
    /// [`delete_edge`](Graph::delete_edge) is called.
    pub fn enable_dels(&mut self) {
        self.use_dels = true;
    }

    /// Stop interpreting and clear both deletion sets.
    pub fn disable_dels(&mut self) {
        self.use_dels = false;
        self.delv.clear();
        self.dele.clear();
    }

    /// Forget vertex deletions but keep edge deletions.
    pub fn clear_vertex_deletions(&mut self) {
        self.delv.clear();
    }

    pub fn delete_vertex(&mut self, v: VertexIndex) {
        debug_assert!(self.use_dels);
        self.delv.insert(v);
    }

    pub fn delete_edge(&mut self, e: EdgeIndex) {
        debug_assert!(self.use_dels);
        self.dele.insert(e);
    }

    pub fn deleted_vertex(&self, v: VertexIndex) -> bool {
        self.use_dels && self.delv.contains(v)
    }

    pub fn deleted_edge(&self, e: EdgeIndex) -> bool {
        self.use_dels && self.dele.contains(e)
    }
}
