//! Adversarial and stochastic game-tree search.
//!
//! Three engines over the [`quest_core::Game`] capability, each returning
//! the best next action for the maximizing agent (index 0):
//!
//! - [`Minimax`] — alternating max/min over all adversaries
//! - [`AlphaBeta`] — minimax with alpha-beta pruning; chooses the identical
//!   root action while visiting a subset of nodes
//! - [`Expectimax`] — non-maximizing agents are uniform chance nodes
//!
//! All engines are bounded by a maximum ply depth and score cutoff leaves
//! through a pluggable [`Evaluate`] function.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod alphabeta;
pub mod eval;
pub mod expectimax;
pub mod minimax;
mod tree;

pub use alphabeta::AlphaBeta;
pub use eval::{
    evaluator_named, CompositeEvaluate, CompositeWeights, EvalLookupError, Evaluate,
    GameSearchConfig, ScoreEvaluate,
};
pub use expectimax::Expectimax;
pub use minimax::Minimax;
