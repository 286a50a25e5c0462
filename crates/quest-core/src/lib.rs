//! Deterministic, environment-agnostic search capability traits.
//!
//! The core crate intentionally does not prescribe any concrete environment:
//! engines in `quest-graph` and `quest-gametree` drive traversal purely
//! through the [`SearchSpace`] and [`Game`] capabilities defined here.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod game;
pub mod math;
pub mod space;

pub use game::{AgentIndex, Game, MAX_AGENT};
pub use math::{manhattan, GridPos};
pub use space::{SearchSpace, Successor};
