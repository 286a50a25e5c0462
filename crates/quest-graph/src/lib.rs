//! Generic graph search over an opaque state space.
//!
//! Four disciplines share one expansion loop; only the [`Frontier`] backing
//! and the finalized-state record differ:
//!
//! - [`depth_first`] — LIFO frontier, first-visit finalization
//! - [`breadth_first`] — FIFO frontier, first-visit finalization
//! - [`uniform_cost`] — min-cost frontier, first-visit finalization
//! - [`astar`] — min-cost-plus-heuristic frontier, best-cost finalization
//!   with reopening on a strictly cheaper path
//!
//! An unreachable goal yields an empty action sequence, not an error.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod frontier;
pub mod heuristic;
pub mod search;

pub use frontier::{FifoFrontier, Frontier, LifoFrontier, MinCostFrontier};
pub use heuristic::{Heuristic, NullHeuristic};
pub use search::{
    astar, astar_run, breadth_first, breadth_first_run, depth_first, depth_first_run,
    uniform_cost, uniform_cost_run, SearchRun,
};
