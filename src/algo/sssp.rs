//! The scaling driver: repeated restricted solves until no negative
//! reduced weight remains.
//!
//! Weights and potentials are first multiplied by 4N so that the rounding
//! in the per-step rescaling loses no information. Each step divides the
//! reduced weights by roughly a third of the current negative magnitude,
//! solves the resulting restricted graph, and folds the answer back into
//! the potentials; the magnitude shrinks by a factor of at least 2/3 per
//! successful step. Once it is down to -3 in scaled units, rounding the
//! potentials back to caller units leaves a restricted graph with no
//! negative cycle; one final restricted solve turns that into a
//! non-negative graph, which is plain Dijkstra territory.

use log::debug;

use crate::config::SsspConfig;
use crate::graph::{Graph, VertexIndex};
use crate::measure::{div_ceil, Measure};
use crate::witness::{validate_negative_cycle, NegativeCycle, ShortestPathTree, Witness};

use super::{bellman_ford, lazy_dijkstra, rsssp};

/// Scaling stops making guaranteed progress below a magnitude of 3, and
/// shrinks the magnitude by >= 1/3 per successful step, so this bound is
/// generous even for 128-bit weights; it only trips on persistent failure.
const MAX_SCALING_ROUNDS: usize = 256;

/// One pass of the scaling loop.
///
/// A no-op (returning true) when the minimum reduced weight is already at
/// least -3. Otherwise divides the reduced weights by `W = floor(-min/3) + 1`
/// with a +1 offset, which makes them at least -1; runs the restricted
/// solver on that graph; and on success adds `W * pure_dist` to the
/// potentials, improving the minimum reduced weight to at least `-2W + 1`.
///
/// Returns false when the restricted solver failed; the caller decides
/// whether the budget or a negative cycle is to blame.
pub fn one_step_scaling<W: Measure>(g: &mut Graph<W>, cfg: &mut SsspConfig) -> bool {
    let min_weight = g.min_weight();
    let three = W::from_usize(3);
    if min_weight >= -three {
        return true;
    }
    let divisor = (-min_weight) / three + W::ONE;
    debug!(
        "scaling step: min weight {:?}, divisor {:?}",
        min_weight, divisor
    );

    let mut h = Graph::new(g.vertex_count());
    h.is_scc = true;
    for e in 0..g.edge_count() {
        let edge = g.edge(e);
        h.add_edge(edge.source, edge.target, div_ceil(g.weight(e), divisor) + W::ONE);
    }

    let witness = rsssp::solve_rsssp(&mut h, cfg);
    let Witness::ShortestPathTree(tree) = witness else {
        return false;
    };
    for v in 0..g.vertex_count() {
        g.add_potential(v, divisor * tree.pure_dist[v]);
    }
    true
}

/// Single-source shortest paths on a graph that may have negative edge
/// weights but no negative cycle.
///
/// The caller's graph is left untouched; the driver works on a 4N-scaled
/// clone. On success the witness tree is expressed in the caller's raw
/// weights: `dist` equals `pure_dist` and holds the distance from `source`
/// to every vertex (`W::MAX` when unreachable), and the parent edges use
/// the caller's edge indices.
///
/// On failure the driver hunts for the negative cycle that would explain
/// the solver's trouble and returns it as a validated
/// [`Witness::NegativeCycle`]. If there is none (the budget was simply too
/// small), the witness is [`Witness::Unknown`] and the caller retries with
/// a larger budget or a different seed.
///
/// # Panics
///
/// Panics if `source` is not a vertex of `g`.
///
/// # Example
///
/// ```
/// use negative_sssp::{solve_sssp, Graph, SsspConfig, Witness};
///
/// let mut g: Graph<i64> = Graph::new(3);
/// g.add_edge(0, 1, 2);
/// g.add_edge(1, 2, -1);
///
/// let mut cfg = SsspConfig::trivial(0x5174);
/// match solve_sssp(&g, 0, &mut cfg) {
///     Witness::ShortestPathTree(tree) => assert_eq!(tree.dist, vec![0, 2, 1]),
///     other => panic!("expected a tree witness, got {:?}", other),
/// }
/// ```
pub fn solve_sssp<W: Measure>(
    g: &Graph<W>,
    source: VertexIndex,
    cfg: &mut SsspConfig,
) -> Witness<W> {
    let n = g.vertex_count();
    assert!(source < n, "source vertex {} out of range", source);

    let mult = W::from_usize(4 * n);
    let mut h = g.clone();
    h.scale_weights(mult);

    let floor = -W::from_usize(3);
    for _ in 0..MAX_SCALING_ROUNDS {
        if h.min_weight() >= floor {
            break;
        }
        if !one_step_scaling(&mut h, cfg) {
            return failure(g);
        }
    }
    if h.min_weight() < floor {
        return failure(g);
    }

    // Round the scaled potentials back to caller units. The -3 bound in
    // scaled units becomes -1 in caller units, i.e. a restricted graph; and
    // its cycles are non-negative outright, because every cycle weight is a
    // multiple of 4N yet bounded below by -3N.
    let mut r = g.clone();
    r.is_scc = true;
    for v in 0..n {
        r.set_potential(v, div_ceil(h.potential(v), mult));
    }

    if r.min_weight() < W::ZERO {
        let witness = rsssp::solve_rsssp(&mut r, cfg);
        let Witness::ShortestPathTree(tree) = witness else {
            return failure(g);
        };
        // A valid tree from the virtual source is itself a potential that
        // clears the last negative weights.
        for v in 0..n {
            r.add_potential(v, tree.dist[v]);
        }
    }

    let mut tree = lazy_dijkstra::single_source(&r, source, 1, false, &mut cfg.capper);
    if cfg.capper.fail() || !tree.validate(&r) {
        return failure(g);
    }

    let dist = tree.pure_dist;
    Witness::ShortestPathTree(ShortestPathTree {
        dist: dist.clone(),
        parent_edge: tree.parent_edge,
        pure_dist: dist,
    })
}

/// Map a failed run to its witness.
///
/// A negative cycle makes the restricted solver's reconcile pass relax
/// forever, so by the time a failure surfaces here the budget is spent no
/// matter which kind of failure it was. The one certificate still worth
/// hunting for is the cycle itself; it is extracted on the caller's
/// original graph and validated. Without one, the verdict is `Unknown` and
/// retrying is the caller's call.
fn failure<W: Measure>(g: &Graph<W>) -> Witness<W> {
    match bellman_ford::find_negative_cycle(g) {
        Some(edges) if validate_negative_cycle(g, &edges) => {
            Witness::NegativeCycle(NegativeCycle { edges })
        }
        _ => Witness::Unknown,
    }
}
