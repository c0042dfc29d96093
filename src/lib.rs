//! Single-source shortest paths with negative edge weights.
//!
//! This crate implements the scaling algorithm of Bernstein, Chechik and
//! Fineman (2023) for directed graphs with integer weights that may be
//! negative, as long as no cycle has negative total weight. An outer loop
//! shrinks the magnitude of the negative weights by adjusting a per-vertex
//! potential function, and each pass is answered by a randomized recursive
//! *restricted* solver that decomposes a strongly connected graph by
//! carving random balls around light vertices.
//!
//! The central types are [`Graph`], the potential-carrying edge-list graph;
//! [`Witness`], the independently checkable certificate of an outcome; and
//! [`SsspConfig`], which bundles the operation budget (the "capper",
//! standing in for a wall clock) with the seeded random generator.
//!
//! The solver is Las Vegas style: with a bounded budget a run may come back
//! [`Witness::Unknown`], and the caller retries with a larger budget or a
//! different seed. Valid witnesses are always genuinely valid: the
//! validators re-check them against the graph without trusting the solver.
//!
//! ```
//! use negative_sssp::{solve_sssp, Graph, SsspConfig, Witness};
//!
//! let mut g: Graph<i64> = Graph::new(4);
//! g.add_edge(0, 1, 5);
//! g.add_edge(1, 2, -3);
//! g.add_edge(0, 2, 4);
//! g.add_edge(2, 3, 1);
//!
//! let mut cfg = SsspConfig::trivial(0x5174);
//! match solve_sssp(&g, 0, &mut cfg) {
//!     Witness::ShortestPathTree(tree) => assert_eq!(tree.dist, vec![0, 5, 2, 3]),
//!     other => panic!("expected a tree witness, got {:?}", other),
//! }
//! ```

pub mod algo;
pub mod capper;
pub mod config;
pub mod graph;
pub mod measure;
pub mod prelude;
pub mod scc;
mod scored;
pub mod witness;

pub use crate::algo::{one_step_scaling, solve_restricted, solve_rsssp, solve_sssp};
pub use crate::capper::OperationCapper;
pub use crate::config::SsspConfig;
pub use crate::graph::{Edge, EdgeIndex, Graph, VertexIndex};
pub use crate::measure::Measure;
pub use crate::scc::{EdgeLocation, SccDecomposition};
pub use crate::witness::{NegativeCycle, ShortestPathTree, Witness};
