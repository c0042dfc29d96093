//! Shortest-path algorithms over [`Graph`](crate::Graph).
//!
//! The leaves ([`dijkstra`], [`bellman_ford`], [`lazy_dijkstra`]) are
//! usable on their own; [`rsssp`] and [`sssp`] compose them into the full
//! negative-weight solver.

pub mod bellman_ford;
pub mod dijkstra;
pub mod lazy_dijkstra;
pub mod rsssp;
pub mod sssp;

pub use rsssp::{solve_restricted, solve_rsssp};
pub use sssp::{one_step_scaling, solve_sssp};
