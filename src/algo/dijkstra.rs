//! Multi-source Dijkstra on reduced weights, and ball carving.

use std::collections::BinaryHeap;

use crate::capper::OperationCapper;
use crate::graph::{EdgeIndex, Graph, VertexIndex};
use crate::measure::Measure;
use crate::scored::MinScored;

/// Drain `queue`, relaxing along non-negative reduced edges only.
///
/// Entries whose score no longer matches the distance vector are stale and
/// skipped. Shared by the plain Dijkstra and the Dijkstra phase of the lazy
/// variant.
pub(crate) fn relax_non_negative<W: Measure>(
    g: &Graph<W>,
    queue: &mut BinaryHeap<MinScored<W, VertexIndex>>,
    dist: &mut [W],
    parent: &mut [Option<EdgeIndex>],
) {
    while let Some(MinScored(d, v)) = queue.pop() {
        if d != dist[v] {
            continue;
        }
        for &e in g.out_edges(v) {
            if g.deleted_edge(e) {
                continue;
            }
            let w = g.weight(e);
            if w < W::ZERO {
                continue;
            }
            let target = g.edge(e).target;
            if g.deleted_vertex(target) {
                continue;
            }
            let next = d + w;
            if dist[target] <= next {
                continue;
            }
            dist[target] = next;
            parent[target] = Some(e);
            queue.push(MinScored(next, target));
        }
    }
}

/// Dijkstra's algorithm from a set of sources, all at distance zero.
///
/// With `ignore_negative_edges` set, negative reduced edges are invisible
/// and the result is a shortest-path vector of the non-negative subgraph.
/// Consumes one capper increment; on an exhausted budget the initial
/// distance vector is returned untouched.
///
/// # Panics
///
/// Panics if `ignore_negative_edges` is false and the graph has a negative
/// reduced edge. Callers asserting non-negativity are expected to be right.
pub fn multi_source<W: Measure>(
    g: &Graph<W>,
    sources: &[VertexIndex],
    ignore_negative_edges: bool,
    capper: &mut OperationCapper,
) -> Vec<W> {
    if !ignore_negative_edges {
        assert!(
            g.min_weight() >= W::ZERO,
            "dijkstra requires non-negative reduced weights"
        );
    }

    let mut dist = g.initial_dist();
    let mut parent = vec![None; g.vertex_count()];
    let mut queue = BinaryHeap::new();
    for &s in sources {
        if g.deleted_vertex(s) {
            continue;
        }
        dist[s] = W::ZERO;
        queue.push(MinScored(W::ZERO, s));
    }

    if !capper.incr(1) {
        return dist;
    }
    relax_non_negative(g, &mut queue, &mut dist, &mut parent);
    dist
}

/// Dijkstra's algorithm from a single source.
pub fn single_source<W: Measure>(
    g: &Graph<W>,
    source: VertexIndex,
    ignore_negative_edges: bool,
    capper: &mut OperationCapper,
) -> Vec<W> {
    multi_source(g, &[source], ignore_negative_edges, capper)
}

/// The ball of radius `radius` around `src`, and its boundary.
///
/// The ball is the set of vertices at non-negative-edge distance at most
/// `radius` from `src`; the boundary is every non-deleted edge from a ball
/// vertex to a vertex outside the ball. Consumes one capper increment; on an
/// exhausted budget both sets come back empty.
pub fn ball_and_boundary<W: Measure>(
    g: &Graph<W>,
    src: VertexIndex,
    radius: W,
    capper: &mut OperationCapper,
) -> (Vec<VertexIndex>, Vec<EdgeIndex>) {
    let mut ball = Vec::new();
    let mut boundary = Vec::new();
    if !capper.incr(1) {
        return (ball, boundary);
    }

    let mut dist = g.initial_dist();
    let mut queue = BinaryHeap::new();
    dist[src] = W::ZERO;
    queue.push(MinScored(W::ZERO, src));

    while let Some(MinScored(d, v)) = queue.pop() {
        if d != dist[v] || d > radius {
            continue;
        }
        ball.push(v);
        for &e in g.out_edges(v) {
            if g.deleted_edge(e) {
                continue;
            }
            let w = g.weight(e);
            if w < W::ZERO {
                continue;
            }
            let target = g.edge(e).target;
            if g.deleted_vertex(target) {
                continue;
            }
            let next = d + w;
            if dist[target] > next {
                dist[target] = next;
                queue.push(MinScored(next, target));
            }
        }
    }

    for &v in &ball {
        for &e in g.out_edges(v) {
            if g.deleted_edge(e) {
                continue;
            }
            let target = g.edge(e).target;
            if g.deleted_vertex(target) {
                continue;
            }
            if dist[target] > radius {
                boundary.push(e);
            }
        }
    }

    (ball, boundary)
}
