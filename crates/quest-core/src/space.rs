use std::hash::Hash;

/// One expansion step: the state an action leads to and what it costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// A single-agent state space.
///
/// The core crate does not prescribe what a state is; engines only require
/// that states can be cloned, compared, and hashed so visited records work.
/// Successors must be fresh values — engines never mutate a state in place.
pub trait SearchSpace {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(state, action, cost)` triples reachable in one step.
    ///
    /// Enumeration order must be deterministic; engines break priority ties
    /// by insertion order, so a stable order here yields stable paths.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of a legal action sequence applied from the initial state.
    fn path_cost(&self, actions: &[Self::Action]) -> f64;
}
