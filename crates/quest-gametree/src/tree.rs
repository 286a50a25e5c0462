use quest_core::{AgentIndex, Game, MAX_AGENT};

/// Role of a tree node, derived from the agent index.
///
/// Dispatching on this enum is the whole of the engines' node-type
/// machinery; there is no per-role polymorphism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Max,
    Min,
    Chance,
}

impl Role {
    /// Adversarial reading: every non-maximizer minimizes.
    pub(crate) fn adversarial(agent: AgentIndex) -> Self {
        if agent == MAX_AGENT {
            Role::Max
        } else {
            Role::Min
        }
    }

    /// Stochastic reading: every non-maximizer is a chance node.
    pub(crate) fn stochastic(agent: AgentIndex) -> Self {
        if agent == MAX_AGENT {
            Role::Max
        } else {
            Role::Chance
        }
    }

    /// Seed value a selection loop starts from.
    pub(crate) fn seed(self) -> f64 {
        match self {
            Role::Max => f64::NEG_INFINITY,
            Role::Min => f64::INFINITY,
            Role::Chance => 0.0,
        }
    }

    /// Whether `candidate` strictly beats `incumbent` for this role.
    ///
    /// Strict comparison keeps the earliest-enumerated action on ties, so
    /// pruned and unpruned engines agree action-for-action.
    pub(crate) fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Role::Max => candidate > incumbent,
            Role::Min => candidate < incumbent,
            Role::Chance => false,
        }
    }
}

/// Advance the turn: agent index wraps modulo agent count and the ply
/// counter increments only on wraparound to the maximizer.
pub(crate) fn next_turn(agent: AgentIndex, ply: u32, agents: usize) -> (AgentIndex, u32) {
    let next = (agent + 1) % agents;
    let next_ply = if next == MAX_AGENT { ply + 1 } else { ply };
    (next, next_ply)
}

/// Whether recursion bottoms out at `state`: terminal or at the ply limit.
pub(crate) fn is_cutoff<G: Game>(state: &G, ply: u32, max_ply: u32) -> bool {
    state.is_win() || state.is_lose() || ply == max_ply
}
