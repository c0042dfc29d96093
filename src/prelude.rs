//! Commonly used items.
//!
//! ```
//! use negative_sssp::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::algo::{solve_rsssp, solve_sssp};
#[doc(no_inline)]
pub use crate::capper::OperationCapper;
#[doc(no_inline)]
pub use crate::config::SsspConfig;
#[doc(no_inline)]
pub use crate::graph::{Edge, EdgeIndex, Graph, VertexIndex};
#[doc(no_inline)]
pub use crate::witness::{NegativeCycle, ShortestPathTree, Witness};
