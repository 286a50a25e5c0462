#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters recorded by one graph-search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphTelemetry {
    /// Frontier entries popped and finalized.
    pub expanded: u64,
    /// Successor entries pushed onto the frontier.
    pub generated: u64,
    /// Successors skipped because the finalized record rejected them.
    pub duplicates_suppressed: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl GraphTelemetry {
    pub fn note_frontier_size(&mut self, size: usize) {
        let size = size as u64;
        if size > self.frontier_high_water {
            self.frontier_high_water = size;
        }
    }
}

/// Counters recorded by one game-tree decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeTelemetry {
    /// Nodes evaluated, leaves included.
    pub nodes_visited: u64,
    /// Leaves scored by the evaluation function.
    pub leaves_evaluated: u64,
    /// Subtrees abandoned by an alpha/beta cutoff.
    pub cutoffs: u64,
}
