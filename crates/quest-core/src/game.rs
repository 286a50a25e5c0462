use crate::math::GridPos;

/// Index of a turn-taking agent. Agent [`MAX_AGENT`] is the maximizer;
/// agents `1..agent_count()` are adversaries or chance agents.
pub type AgentIndex = usize;

/// The maximizing agent always moves first and owns index 0.
pub const MAX_AGENT: AgentIndex = 0;

/// A turn-taking multi-agent game.
///
/// Tree-search engines drive the game purely through this capability: legal
/// actions, transitions, and terminal predicates. Transitions return fresh
/// states; engines never mutate a state in place.
///
/// The feature accessors at the bottom are consumed only by evaluation
/// functions. Games without a grid or item layout keep the defaults, which
/// make the corresponding evaluation terms vanish.
pub trait Game: Sized {
    type Action: Clone;

    /// Total number of agents, maximizer included. Always at least 1.
    fn agent_count(&self) -> usize;

    /// Legal actions for `agent` in this state. May be empty; an agent with
    /// no legal actions is treated as a dead-end leaf, not an error.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state after `agent` takes `action`.
    fn next_state(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    /// Whether this state is a win for the maximizer.
    fn is_win(&self) -> bool;

    /// Whether this state is a loss for the maximizer.
    fn is_lose(&self) -> bool;

    /// Running score of the state, as the environment defines it.
    fn score(&self) -> f64;

    /// Grid position of the maximizer, for distance-based evaluation.
    fn agent_position(&self) -> GridPos {
        GridPos::ORIGIN
    }

    /// Grid positions of threat agents. Games without threats keep the
    /// default; the evaluation threat term is then zero.
    fn threat_positions(&self) -> Vec<GridPos> {
        Vec::new()
    }

    /// Grid positions of remaining reward items. Games without items keep
    /// the default; the evaluation reward and remaining terms are then zero.
    fn reward_positions(&self) -> Vec<GridPos> {
        Vec::new()
    }
}
