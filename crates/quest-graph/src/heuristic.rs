use quest_core::SearchSpace;

/// Estimate of the remaining cost from `state` to the nearest goal.
///
/// A* requires the estimate to be admissible (never overestimate). The
/// engine additionally tolerates inconsistent heuristics by reopening
/// states on strictly cheaper paths.
pub trait Heuristic<P: SearchSpace> {
    fn estimate(&self, state: &P::State, problem: &P) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchSpace,
    F: Fn(&P::State, &P) -> f64,
{
    fn estimate(&self, state: &P::State, problem: &P) -> f64 {
        self(state, problem)
    }
}

/// The trivial always-zero estimate; makes A* coincide with uniform-cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P: SearchSpace> Heuristic<P> for NullHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> f64 {
        0.0
    }
}
