use quest_core::{manhattan, Game};
use thiserror::Error;

/// Scores a leaf game state for the maximizer.
///
/// Invoked only at cutoff, terminal, or dead-end leaves. Scores must be
/// finite over reachable states so the total ordering the engines rely on
/// holds.
pub trait Evaluate<G: Game>: std::fmt::Debug {
    fn evaluate(&self, state: &G) -> f64;
}

impl<G: Game> Evaluate<G> for Box<dyn Evaluate<G>> {
    fn evaluate(&self, state: &G) -> f64 {
        (**self).evaluate(state)
    }
}

/// The default evaluation: the state's raw running score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluate;

impl<G: Game> Evaluate<G> for ScoreEvaluate {
    fn evaluate(&self, state: &G) -> f64 {
        state.score()
    }
}

/// Fixed weights for [`CompositeEvaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeWeights {
    /// Penalty weight on inverse distance to the nearest threat.
    pub threat: f64,
    /// Bonus weight on inverse distance to the nearest reward item.
    pub reward: f64,
    /// Penalty weight per remaining reward item.
    pub remaining: f64,
    /// Bonus weight on the running score.
    pub score: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            threat: 5.0,
            reward: 10.0,
            remaining: 2.0,
            score: 1.0,
        }
    }
}

/// Combines score, threat proximity, reward proximity, and remaining-item
/// count under fixed weights.
///
/// Distances are Manhattan, offset by one so the reciprocal terms are
/// structurally finite. A state with no threats (or no reward items)
/// contributes zero for the corresponding term rather than a guarded
/// division.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeEvaluate {
    weights: CompositeWeights,
}

impl CompositeEvaluate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: CompositeWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> CompositeWeights {
        self.weights
    }
}

impl<G: Game> Evaluate<G> for CompositeEvaluate {
    fn evaluate(&self, state: &G) -> f64 {
        let pos = state.agent_position();

        let threat_penalty = state
            .threat_positions()
            .iter()
            .map(|t| manhattan(pos, *t))
            .min()
            .map(|d| self.weights.threat / (f64::from(d) + 1.0))
            .unwrap_or(0.0);

        let rewards = state.reward_positions();
        let reward_bonus = rewards
            .iter()
            .map(|r| manhattan(pos, *r))
            .min()
            .map(|d| self.weights.reward / (f64::from(d) + 1.0))
            .unwrap_or(0.0);

        let remaining_penalty = self.weights.remaining * rewards.len() as f64;

        state.score() * self.weights.score + reward_bonus - threat_penalty - remaining_penalty
    }
}

/// Raised when a configuration names an evaluation function that does not
/// exist. Detected at engine construction, before any search runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalLookupError {
    #[error("unknown evaluation function `{0}`")]
    Unknown(String),
}

/// Resolve an evaluation function by name: `"score"` or `"composite"`.
pub fn evaluator_named<G: Game>(name: &str) -> Result<Box<dyn Evaluate<G>>, EvalLookupError> {
    match name {
        "score" => Ok(Box::new(ScoreEvaluate)),
        "composite" => Ok(Box::new(CompositeEvaluate::new())),
        other => Err(EvalLookupError::Unknown(other.to_string())),
    }
}

/// Construction parameters shared by the three tree engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSearchConfig {
    /// Full agent cycles to look ahead.
    pub max_ply: u32,
    /// Name of the evaluation function, resolved via [`evaluator_named`].
    pub evaluator: String,
}

impl Default for GameSearchConfig {
    fn default() -> Self {
        Self {
            max_ply: 2,
            evaluator: "score".to_string(),
        }
    }
}
