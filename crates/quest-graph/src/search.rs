use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use quest_core::{SearchSpace, Successor};
use quest_tools::GraphTelemetry;

use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, MinCostFrontier};
use crate::heuristic::Heuristic;

/// Result of one graph-search run.
///
/// `actions` is empty both when the initial state is already a goal and when
/// no goal is reachable; `goal_reached` disambiguates.
#[derive(Debug, Clone)]
pub struct SearchRun<A> {
    pub actions: Vec<A>,
    pub goal_reached: bool,
    pub telemetry: GraphTelemetry,
}

/// One frontier entry: the state, its arena node, and its accumulated cost.
///
/// Paths are not carried per entry; the arena stores `(parent, action)` and
/// the path is reconstructed only on success.
struct OpenItem<S> {
    state: S,
    node: usize,
    g: f64,
}

/// Arena of search nodes with parent back-references.
struct Arena<A> {
    nodes: Vec<(Option<usize>, Option<A>)>,
}

impl<A: Clone> Arena<A> {
    fn with_root() -> Self {
        Self {
            nodes: vec![(None, None)],
        }
    }

    fn child(&mut self, parent: usize, action: A) -> usize {
        self.nodes.push((Some(parent), Some(action)));
        self.nodes.len() - 1
    }

    /// Walk parent links back to the root, collecting actions.
    fn path(&self, mut node: usize) -> Vec<A> {
        let mut actions = Vec::new();
        while let (Some(parent), Some(action)) = &self.nodes[node] {
            actions.push(action.clone());
            node = *parent;
        }
        actions.reverse();
        actions
    }
}

/// Record of finalized states.
///
/// First-visit-wins suffices for DFS/BFS/UCS (their pop disciplines make it
/// correct). A* uses a best-cost map so a state may be finalized again via a
/// strictly cheaper path, which keeps inconsistent heuristics optimal at
/// extra cost.
enum Finalized<S> {
    FirstVisit(HashSet<S>),
    BestCost(HashMap<S, f64>),
}

impl<S: Clone + Eq + Hash> Finalized<S> {
    fn first_visit() -> Self {
        Finalized::FirstVisit(HashSet::new())
    }

    fn best_cost() -> Self {
        Finalized::BestCost(HashMap::new())
    }

    /// Whether a frontier entry for `state` at cost `g` is still worth
    /// pushing or popping.
    fn admits(&self, state: &S, g: f64) -> bool {
        match self {
            Finalized::FirstVisit(seen) => !seen.contains(state),
            Finalized::BestCost(best) => match best.get(state) {
                Some(recorded) => g < *recorded,
                None => true,
            },
        }
    }

    /// Finalize `state` at cost `g`. Returns `false` when the record had
    /// already finalized it at least as cheaply (stale frontier entry).
    fn finalize(&mut self, state: &S, g: f64) -> bool {
        if !self.admits(state, g) {
            return false;
        }
        match self {
            Finalized::FirstVisit(seen) => {
                seen.insert(state.clone());
            }
            Finalized::BestCost(best) => {
                best.insert(state.clone(), g);
            }
        }
        true
    }
}

/// Shared expansion loop: pop per the frontier's discipline, skip stale
/// entries, finalize, goal-test the popped state (never children), expand.
fn drive<P, F>(
    problem: &P,
    mut frontier: F,
    mut finalized: Finalized<P::State>,
    priority: impl Fn(&P::State, f64) -> f64,
) -> SearchRun<P::Action>
where
    P: SearchSpace,
    F: Frontier<OpenItem<P::State>>,
{
    let mut arena = Arena::with_root();
    let mut telemetry = GraphTelemetry::default();

    let root = problem.initial_state();
    let root_priority = priority(&root, 0.0);
    frontier.push(
        OpenItem {
            state: root,
            node: 0,
            g: 0.0,
        },
        root_priority,
    );
    telemetry.note_frontier_size(frontier.len());

    while let Some(OpenItem { state, node, g }) = frontier.pop() {
        if !finalized.finalize(&state, g) {
            continue;
        }
        telemetry.expanded += 1;

        if problem.is_goal(&state) {
            return SearchRun {
                actions: arena.path(node),
                goal_reached: true,
                telemetry,
            };
        }

        for Successor {
            state: next,
            action,
            cost,
        } in problem.successors(&state)
        {
            let next_g = g + cost;
            if !finalized.admits(&next, next_g) {
                telemetry.duplicates_suppressed += 1;
                continue;
            }
            let child = arena.child(node, action);
            let next_priority = priority(&next, next_g);
            frontier.push(
                OpenItem {
                    state: next,
                    node: child,
                    g: next_g,
                },
                next_priority,
            );
            telemetry.generated += 1;
        }
        telemetry.note_frontier_size(frontier.len());
    }

    // Frontier exhausted before a goal was found.
    SearchRun {
        actions: Vec::new(),
        goal_reached: false,
        telemetry,
    }
}

/// Depth-first search. No optimality guarantee.
pub fn depth_first<P: SearchSpace>(problem: &P) -> Vec<P::Action> {
    depth_first_run(problem).actions
}

pub fn depth_first_run<P: SearchSpace>(problem: &P) -> SearchRun<P::Action> {
    drive(
        problem,
        LifoFrontier::new(),
        Finalized::first_visit(),
        |_, _| 0.0,
    )
}

/// Breadth-first search. Optimal under unit step costs.
pub fn breadth_first<P: SearchSpace>(problem: &P) -> Vec<P::Action> {
    breadth_first_run(problem).actions
}

pub fn breadth_first_run<P: SearchSpace>(problem: &P) -> SearchRun<P::Action> {
    drive(
        problem,
        FifoFrontier::new(),
        Finalized::first_visit(),
        |_, _| 0.0,
    )
}

/// Uniform-cost search. Optimal for non-negative step costs.
pub fn uniform_cost<P: SearchSpace>(problem: &P) -> Vec<P::Action> {
    uniform_cost_run(problem).actions
}

pub fn uniform_cost_run<P: SearchSpace>(problem: &P) -> SearchRun<P::Action> {
    drive(
        problem,
        MinCostFrontier::new(),
        Finalized::first_visit(),
        |_, g| g,
    )
}

/// A* search. Optimal for non-negative step costs and an admissible
/// heuristic; reopens states on strictly cheaper paths so inconsistent
/// heuristics still get optimal answers.
pub fn astar<P, H>(problem: &P, heuristic: &H) -> Vec<P::Action>
where
    P: SearchSpace,
    H: Heuristic<P>,
{
    astar_run(problem, heuristic).actions
}

pub fn astar_run<P, H>(problem: &P, heuristic: &H) -> SearchRun<P::Action>
where
    P: SearchSpace,
    H: Heuristic<P>,
{
    drive(
        problem,
        MinCostFrontier::new(),
        Finalized::best_cost(),
        |state, g| g + heuristic.estimate(state, problem),
    )
}
