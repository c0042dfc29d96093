//! Restricted SSSP: the randomized recursive core of the solver.
//!
//! A *restricted* graph has every reduced edge weight at least -1. On such a
//! graph the solver either shrinks the problem in vertex count or in the
//! slack parameter kappa: it estimates which vertices have small kappa/4-balls,
//! carves random balls around them, decomposes what remains into strongly
//! connected components, recurses per component, and finally reconciles the
//! per-component answers with one artificial-source lazy Dijkstra after
//! encoding the component trees and the condensation order into the
//! potentials.
//!
//! The recursion is driven by an explicit work stack; the natural recursive
//! presentation would be fine for the expected O(log^2 N) depth, but the
//! stackful form keeps the per-frame state machine explicit and the host
//! stack out of the picture.

use std::mem;

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::config::SsspConfig;
use crate::graph::{Graph, VertexIndex};
use crate::measure::Measure;
use crate::scc::SccDecomposition;
use crate::witness::{ShortestPathTree, Witness};

use super::{dijkstra, lazy_dijkstra};

/// Below this slack the recursion stops subdividing and runs the base case.
const LOW_KAPPA_LIMIT: usize = 2;
/// Additive error eps of the Monte Carlo ball-size estimator.
const BALL_ESTIMATION_ADDITIVE_ERROR: f64 = 0.125;
/// A vertex is light when its estimated ball covers at most this fraction
/// of the graph.
const LIGHT_RATIO: f64 = 0.5 + 2.0 * BALL_ESTIMATION_ADDITIVE_ERROR;
/// Sample count coefficient, 5/eps^2.
const BALL_ESTIMATOR_SAMPLE_COEFF: f64 =
    5.0 / (BALL_ESTIMATION_ADDITIVE_ERROR * BALL_ESTIMATION_ADDITIVE_ERROR);
/// Scales the success probability of the geometric radius distribution.
const RADIUS_TEMPERATURE: f64 = 20.0;

/// Solve restricted SSSP on `g` with initial slack kappa = N.
///
/// `g` must be marked [`is_scc`](Graph::is_scc) and be restricted. Its
/// potentials are updated in place; on success the returned tree's `dist`
/// is reduced with respect to the final potentials and `pure_dist` holds
/// the raw-weight distances from the virtual source.
///
/// Returns [`Witness::Unknown`] when the operation budget runs out or a
/// randomized round fails validation; callers retry with a larger budget or
/// a different seed.
///
/// # Example
///
/// ```
/// use negative_sssp::{solve_rsssp, Graph, SsspConfig, Witness};
///
/// let mut g: Graph<i64> = Graph::new_scc(3);
/// g.add_edge(1, 2, 1);
/// g.add_edge(2, 0, -1);
/// g.add_edge(0, 1, 1);
/// assert!(g.is_restricted());
///
/// let mut cfg = SsspConfig::trivial(0x33343);
/// let mut witness = solve_rsssp(&mut g, &mut cfg);
/// assert!(witness.validate(&g));
/// assert!(matches!(witness, Witness::ShortestPathTree(_)));
/// ```
pub fn solve_rsssp<W: Measure>(g: &mut Graph<W>, cfg: &mut SsspConfig) -> Witness<W> {
    let kappa = g.vertex_count();
    solve_restricted(g, kappa, cfg)
}

/// Solve restricted SSSP with an explicit initial slack.
pub fn solve_restricted<W: Measure>(
    g: &mut Graph<W>,
    kappa: usize,
    cfg: &mut SsspConfig,
) -> Witness<W> {
    let root = mem::replace(g, Graph::new(0));
    let (witness, root) = drive(root, kappa, cfg);
    *g = root;
    witness
}

/// One suspended recursion frame: the carved graph, its decomposition, and
/// the child distance vectors accepted so far.
struct Frame<W> {
    g: Graph<W>,
    kappa: usize,
    decomp: SccDecomposition<W>,
    child_dists: Vec<Vec<W>>,
    next_child: usize,
}

/// What the work loop does next.
enum Step<W> {
    /// Open a frame for this graph at this slack.
    Enter(Graph<W>, usize),
    /// A frame finished; hand its result to the frame below.
    Deliver(Option<ShortestPathTree<W>>, Graph<W>),
}

/// Result of opening a frame.
enum Entered<W> {
    /// The frame completed without recursing (guard, base case, failure).
    Done(Option<ShortestPathTree<W>>, Graph<W>),
    /// The frame carved and decomposed; its components need recursion.
    Expand(Frame<W>),
}

fn drive<W: Measure>(
    root: Graph<W>,
    kappa: usize,
    cfg: &mut SsspConfig,
) -> (Witness<W>, Graph<W>) {
    let mut stack: Vec<Frame<W>> = Vec::new();
    let mut step = Step::Enter(root, kappa);
    loop {
        step = match step {
            Step::Enter(g, kappa) => match enter(g, kappa, cfg) {
                Entered::Done(result, g) => Step::Deliver(result, g),
                Entered::Expand(frame) => next_child_or_finalize(frame, &mut stack, cfg),
            },
            Step::Deliver(result, child_g) => {
                let Some(mut frame) = stack.pop() else {
                    // The root frame finished; `child_g` is the root graph.
                    let witness = match result {
                        Some(tree) => Witness::ShortestPathTree(tree),
                        None => Witness::Unknown,
                    };
                    return (witness, child_g);
                };
                let accepted = match result {
                    Some(mut tree) => {
                        if !cfg.capper.fail() && tree.validate(&child_g) {
                            Some(tree.dist)
                        } else {
                            None
                        }
                    }
                    None => None,
                };
                match accepted {
                    Some(dist) => {
                        frame.child_dists.push(dist);
                        next_child_or_finalize(frame, &mut stack, cfg)
                    }
                    None => {
                        // Any failure aborts the whole recursion; unwind to
                        // the root graph so the caller gets it back.
                        let root_g = stack.into_iter().next().map(|f| f.g).unwrap_or(frame.g);
                        return (Witness::Unknown, root_g);
                    }
                }
            }
        };
    }
}

/// Schedule the next unsolved component of `frame`, or, when all components
/// are answered, run the potential update and the reconcile pass.
fn next_child_or_finalize<W: Measure>(
    mut frame: Frame<W>,
    stack: &mut Vec<Frame<W>>,
    cfg: &mut SsspConfig,
) -> Step<W> {
    if frame.next_child < frame.decomp.num_sccs() {
        let child = frame.next_child;
        frame.next_child += 1;
        let sub = frame.decomp.take_subgraph(child);
        // Small components keep the slack; a component that dodged the size
        // decay pays with half of it.
        let child_kappa = if (sub.vertex_count() as f64)
            <= LIGHT_RATIO * frame.g.vertex_count() as f64
        {
            frame.kappa
        } else {
            frame.kappa / 2
        };
        stack.push(frame);
        return Step::Enter(sub, child_kappa);
    }
    finalize(frame, cfg)
}

/// Open a frame: guard, base case, light estimation, carving, decomposition.
fn enter<W: Measure>(mut g: Graph<W>, kappa: usize, cfg: &mut SsspConfig) -> Entered<W> {
    if !g.is_scc {
        return Entered::Done(None, g);
    }
    debug_assert!(g.is_restricted());

    // One increment per recursion frame.
    if !cfg.capper.incr(1) {
        return Entered::Done(None, g);
    }

    let n = g.vertex_count();
    debug!("restricted frame: n = {}, kappa = {}", n, kappa);

    if n <= 1 || kappa <= LOW_KAPPA_LIMIT {
        let mut tree = lazy_dijkstra::all_source(&g, kappa, false, &mut cfg.capper);
        if cfg.capper.fail() || !tree.validate(&g) {
            return Entered::Done(None, g);
        }
        return Entered::Done(Some(tree), g);
    }

    let in_light = in_light_vertices(&g, kappa, cfg);
    if cfg.capper.fail() {
        return Entered::Done(None, g);
    }
    let mut gt = g.transpose();
    let out_light = in_light_vertices(&gt, kappa, cfg);
    if cfg.capper.fail() {
        return Entered::Done(None, g);
    }
    debug!(
        "light vertices: {} in, {} out of {}",
        in_light.len(),
        out_light.len(),
        n
    );

    g.enable_dels();
    gt.enable_dels();
    carve(&mut g, &mut gt, &out_light, false, kappa, cfg);
    carve(&mut g, &mut gt, &in_light, true, kappa, cfg);

    // Vertices come back for the decomposition; the carved boundary edges
    // stay gone and are what keeps the components small.
    g.clear_vertex_deletions();
    let decomp = SccDecomposition::new(&g);
    debug!("carved graph decomposed into {} components", decomp.num_sccs());

    Entered::Expand(Frame {
        g,
        kappa,
        decomp,
        child_dists: Vec::new(),
        next_child: 0,
    })
}

/// Steps 6 and 7 of a frame: fold the child trees and the condensation
/// order into the potentials, then reconcile with one artificial-source
/// pass over the whole frame graph.
fn finalize<W: Measure>(frame: Frame<W>, cfg: &mut SsspConfig) -> Step<W> {
    let Frame {
        mut g,
        decomp,
        child_dists,
        ..
    } = frame;

    g.disable_dels();
    for (scc, dist) in child_dists.iter().enumerate() {
        for (local, &d) in dist.iter().enumerate() {
            g.add_potential(decomp.vertex_up(scc, local), d);
        }
    }
    // Offsetting by the component index separates the components along the
    // condensation order, so the reconcile pass discovers inter-component
    // distances in one sweep. Component indices are topological, sources
    // first; hence the subtraction.
    for v in 0..g.vertex_count() {
        if let Some((scc, _)) = decomp.vertex_down(v) {
            g.add_potential(v, -W::from_usize(scc));
        }
    }

    let mut tree = lazy_dijkstra::artificial_source(&g, usize::MAX, false, &mut cfg.capper);
    if cfg.capper.fail() || !tree.validate(&g) {
        return Step::Deliver(None, g);
    }
    Step::Deliver(Some(tree), g)
}

/// Estimate the vertices whose inward kappa/4-ball covers at most
/// [`LIGHT_RATIO`] of the graph. Running this on the transpose estimates
/// the out-light vertices.
///
/// Monte Carlo: sample `ceil(BALL_ESTIMATOR_SAMPLE_COEFF * ln N)` start
/// vertices, run a non-negative Dijkstra from each, and count for every
/// vertex how many sampled balls cover it. Each sampled Dijkstra consumes
/// one capper increment; on exhaustion the list comes back empty and the
/// caller observes the failure on the capper.
fn in_light_vertices<W: Measure>(
    g: &Graph<W>,
    kappa: usize,
    cfg: &mut SsspConfig,
) -> Vec<VertexIndex> {
    let n = g.vertex_count();
    let samples = (BALL_ESTIMATOR_SAMPLE_COEFF * (n as f64).ln()).ceil() as usize;
    let radius = W::from_usize(kappa / 4);
    let mut ball_counter = vec![0usize; n];
    for _ in 0..samples {
        let v = cfg.rng.gen_range(0..n);
        if cfg.capper.fail() {
            return Vec::new();
        }
        let dist = dijkstra::single_source(g, v, true, &mut cfg.capper);
        for (j, &d) in dist.iter().enumerate() {
            if d <= radius {
                ball_counter[j] += 1;
            }
        }
    }
    let threshold = LIGHT_RATIO * samples as f64;
    (0..n)
        .filter(|&j| ball_counter[j] as f64 <= threshold)
        .collect()
}

/// Carve a freshly sampled ball around every still-present center, deleting
/// the ball's vertices and its boundary edges from both orientations.
/// `reverse` carves in the transpose (inward balls).
fn carve<W: Measure>(
    g: &mut Graph<W>,
    gt: &mut Graph<W>,
    centers: &[VertexIndex],
    reverse: bool,
    kappa: usize,
    cfg: &mut SsspConfig,
) {
    let n = g.vertex_count();
    for &v in centers {
        if g.deleted_vertex(v) {
            continue;
        }
        let radius = carve_radius::<W>(n, kappa, cfg);
        let (ball, boundary) = if reverse {
            dijkstra::ball_and_boundary(gt, v, radius, &mut cfg.capper)
        } else {
            dijkstra::ball_and_boundary(g, v, radius, &mut cfg.capper)
        };
        for &u in &ball {
            g.delete_vertex(u);
            gt.delete_vertex(u);
        }
        for &e in &boundary {
            g.delete_edge(e);
            gt.delete_edge(e);
        }
    }
}

/// Geometric radius with success probability `tau * ln N / kappa`, clamped to 1.
/// In the clamped regime every ball is a single vertex, which is what the
/// analysis expects for small graphs.
fn carve_radius<W: Measure>(n: usize, kappa: usize, cfg: &mut SsspConfig) -> W {
    let p = (RADIUS_TEMPERATURE * (n as f64).ln() / kappa as f64).min(1.0);
    let r = match Geometric::new(p) {
        Ok(geometric) => geometric.sample(&mut cfg.rng),
        Err(_) => 0,
    };
    W::from_usize(r as usize)
}
