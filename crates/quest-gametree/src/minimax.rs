use std::marker::PhantomData;

use quest_core::{AgentIndex, Game, MAX_AGENT};
use quest_tools::{TraceEvent, TraceSink, TreeTelemetry};

use crate::eval::{evaluator_named, EvalLookupError, Evaluate, GameSearchConfig, ScoreEvaluate};
use crate::tree::{is_cutoff, next_turn, Role};

/// Depth-bounded minimax: one maximizer against one or more minimizers.
///
/// Without pruning the runtime is exponential in ply times branching
/// factor; that cost is the point of comparison for [`crate::AlphaBeta`].
pub struct Minimax<G, E = ScoreEvaluate>
where
    G: Game,
    E: Evaluate<G>,
{
    max_ply: u32,
    evaluator: E,
    telemetry: TreeTelemetry,
    last_value: Option<f64>,
    trace: Option<Box<dyn TraceSink>>,
    _game: PhantomData<fn() -> G>,
}

impl<G, E> Minimax<G, E>
where
    G: Game,
    E: Evaluate<G>,
{
    pub fn new(max_ply: u32, evaluator: E) -> Self {
        Self {
            max_ply,
            evaluator,
            telemetry: TreeTelemetry::default(),
            last_value: None,
            trace: None,
            _game: PhantomData,
        }
    }

    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    pub fn max_ply(&self) -> u32 {
        self.max_ply
    }

    /// Root value computed by the most recent [`Minimax::choose`].
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// Counters from the most recent [`Minimax::choose`].
    pub fn telemetry(&self) -> TreeTelemetry {
        self.telemetry
    }

    /// Pick the best next action for the maximizer.
    ///
    /// Returns `None` only when the maximizer itself has no legal action at
    /// the root (or the root is already terminal).
    pub fn choose(&mut self, state: &G) -> Option<G::Action> {
        self.telemetry = TreeTelemetry::default();
        let (value, action) = self.value(state, MAX_AGENT, 0);
        self.last_value = Some(value);
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(
                TraceEvent::new(0, "minimax.choose")
                    .with_a(self.telemetry.nodes_visited)
                    .with_b(self.telemetry.leaves_evaluated),
            );
        }
        action
    }

    fn value(&mut self, state: &G, agent: AgentIndex, ply: u32) -> (f64, Option<G::Action>) {
        self.telemetry.nodes_visited += 1;

        if is_cutoff(state, ply, self.max_ply) {
            self.telemetry.leaves_evaluated += 1;
            return (self.evaluator.evaluate(state), None);
        }

        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            // Dead-end leaf: an agent with nothing to do scores the state
            // as it stands.
            self.telemetry.leaves_evaluated += 1;
            return (self.evaluator.evaluate(state), None);
        }

        let role = Role::adversarial(agent);
        let mut best_value = role.seed();
        let mut best_action = None;

        for action in actions {
            let next = state.next_state(agent, &action);
            let (next_agent, next_ply) = next_turn(agent, ply, state.agent_count());
            let (value, _) = self.value(&next, next_agent, next_ply);
            if role.prefers(value, best_value) {
                best_value = value;
                best_action = Some(action);
            }
        }

        (best_value, best_action)
    }
}

impl<G: Game> Minimax<G, Box<dyn Evaluate<G>>> {
    /// Construct from a config, resolving the evaluator by name.
    ///
    /// An unknown evaluator name is a fatal configuration error surfaced
    /// here, before any search runs.
    pub fn from_config(config: &GameSearchConfig) -> Result<Self, EvalLookupError> {
        Ok(Self::new(
            config.max_ply,
            evaluator_named::<G>(&config.evaluator)?,
        ))
    }
}
