//! Bellman-Ford relaxation, the crate's ground truth, and a negative-cycle
//! finder for the scaling driver.

use crate::graph::{EdgeIndex, Graph, VertexIndex};
use crate::measure::Measure;

/// Bellman-Ford from a set of sources: N-1 rounds of relaxing every
/// non-deleted edge.
///
/// Exact on any graph without negative cycles, negative edges included.
/// Slow; used as ground truth and for cycle extraction, never on the
/// solver's hot path.
pub fn multi_source<W: Measure>(g: &Graph<W>, sources: &[VertexIndex]) -> Vec<W> {
    let mut dist = g.initial_dist();
    for &s in sources {
        if !g.deleted_vertex(s) {
            dist[s] = W::ZERO;
        }
    }
    let n = g.vertex_count();
    for _ in 1..n {
        for e in 0..g.edge_count() {
            relax(g, e, &mut dist, None);
        }
    }
    dist
}

pub fn single_source<W: Measure>(g: &Graph<W>, source: VertexIndex) -> Vec<W> {
    multi_source(g, &[source])
}

/// Bellman-Ford with every vertex as a source; the result is non-positive.
pub fn all_source<W: Measure>(g: &Graph<W>) -> Vec<W> {
    let sources: Vec<VertexIndex> = (0..g.vertex_count()).collect();
    multi_source(g, &sources)
}

/// Find a cycle of negative weight, if one exists.
///
/// Runs an all-source Bellman-Ford with parent tracking; any edge that can
/// still relax after N-1 rounds witnesses a negative cycle, which is
/// recovered by walking the parent chain. The returned edges are in path
/// order: the target of each edge is the source of the next, cyclically.
pub fn find_negative_cycle<W: Measure>(g: &Graph<W>) -> Option<Vec<EdgeIndex>> {
    let n = g.vertex_count();
    let mut dist: Vec<W> = (0..n)
        .map(|v| {
            if g.deleted_vertex(v) {
                W::MAX
            } else {
                W::ZERO
            }
        })
        .collect();
    let mut parent: Vec<Option<EdgeIndex>> = vec![None; n];
    for _ in 1..n {
        for e in 0..g.edge_count() {
            relax(g, e, &mut dist, Some(&mut parent));
        }
    }

    // Detection round: one more improvable edge means its target can be
    // walked back into a cycle.
    let mut on_cycle = None;
    for e in 0..g.edge_count() {
        if relax(g, e, &mut dist, Some(&mut parent)) {
            on_cycle = Some(g.edge(e).target);
            break;
        }
    }
    let mut v = on_cycle?;

    // N parent steps land strictly inside the cycle.
    for _ in 0..n {
        v = g.edge(parent[v]?).source;
    }

    let mut cycle = Vec::new();
    let mut u = v;
    loop {
        let e = parent[u]?;
        cycle.push(e);
        u = g.edge(e).source;
        if u == v {
            break;
        }
    }
    cycle.reverse();
    Some(cycle)
}

/// Relax one edge; returns whether the target improved.
fn relax<W: Measure>(
    g: &Graph<W>,
    e: EdgeIndex,
    dist: &mut [W],
    parent: Option<&mut [Option<EdgeIndex>]>,
) -> bool {
    if g.deleted_edge(e) {
        return false;
    }
    let edge = g.edge(e);
    if g.deleted_vertex(edge.source) || g.deleted_vertex(edge.target) {
        return false;
    }
    if dist[edge.source] == W::MAX {
        return false;
    }
    let next = dist[edge.source] + g.weight(e);
    if dist[edge.target] <= next {
        return false;
    }
    dist[edge.target] = next;
    if let Some(parent) = parent {
        parent[edge.target] = Some(e);
    }
    true
}
