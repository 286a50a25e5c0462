use std::collections::HashSet;

use quest_core::{manhattan, GridPos, SearchSpace, Successor};
use quest_graph::{
    astar, astar_run, breadth_first, breadth_first_run, depth_first, depth_first_run,
    uniform_cost, uniform_cost_run, NullHeuristic,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    North,
    East,
    South,
    West,
}

impl Move {
    const ALL: [Move; 4] = [Move::North, Move::East, Move::South, Move::West];

    fn apply(self, pos: GridPos) -> GridPos {
        match self {
            Move::North => GridPos::new(pos.x, pos.y - 1),
            Move::East => GridPos::new(pos.x + 1, pos.y),
            Move::South => GridPos::new(pos.x, pos.y + 1),
            Move::West => GridPos::new(pos.x - 1, pos.y),
        }
    }
}

/// A small grid maze. Step cost is `cost(entered_cell)`, 1.0 by default.
struct Maze {
    width: i32,
    height: i32,
    walls: HashSet<GridPos>,
    start: GridPos,
    goal: GridPos,
    cost: fn(GridPos) -> f64,
}

impl Maze {
    fn open(width: i32, height: i32, start: GridPos, goal: GridPos) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            start,
            goal,
            cost: |_| 1.0,
        }
    }

    fn with_walls(mut self, walls: impl IntoIterator<Item = (i32, i32)>) -> Self {
        self.walls = walls
            .into_iter()
            .map(|(x, y)| GridPos::new(x, y))
            .collect();
        self
    }

    fn with_cost(mut self, cost: fn(GridPos) -> f64) -> Self {
        self.cost = cost;
        self
    }

    fn passable(&self, pos: GridPos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x < self.width
            && pos.y < self.height
            && !self.walls.contains(&pos)
    }
}

impl SearchSpace for Maze {
    type State = GridPos;
    type Action = Move;

    fn initial_state(&self) -> GridPos {
        self.start
    }

    fn is_goal(&self, state: &GridPos) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &GridPos) -> Vec<Successor<GridPos, Move>> {
        Move::ALL
            .into_iter()
            .filter_map(|m| {
                let next = m.apply(*state);
                self.passable(next)
                    .then(|| Successor::new(next, m, (self.cost)(next)))
            })
            .collect()
    }

    fn path_cost(&self, actions: &[Move]) -> f64 {
        let mut pos = self.start;
        let mut total = 0.0;
        for m in actions {
            pos = m.apply(pos);
            total += (self.cost)(pos);
        }
        total
    }
}

/// Replay `actions` through the successor function and return the final state.
fn replay(maze: &Maze, actions: &[Move]) -> GridPos {
    let mut pos = maze.start;
    for m in actions {
        let step = maze
            .successors(&pos)
            .into_iter()
            .find(|s| s.action == *m)
            .expect("action must be legal at replay time");
        pos = step.state;
    }
    pos
}

fn manhattan_to_goal(state: &GridPos, maze: &Maze) -> f64 {
    f64::from(manhattan(*state, maze.goal))
}

/// A 5x5 maze with a wall forcing a detour:
/// ```text
/// S . # . .
/// . . # . .
/// . . # . .
/// . . # . .
/// . . . . G
/// ```
fn detour_maze() -> Maze {
    Maze::open(5, 5, GridPos::new(0, 0), GridPos::new(4, 4))
        .with_walls([(2, 0), (2, 1), (2, 2), (2, 3)])
}

#[test]
fn every_algorithm_replays_to_the_goal() {
    let maze = detour_maze();

    for (name, actions) in [
        ("dfs", depth_first(&maze)),
        ("bfs", breadth_first(&maze)),
        ("ucs", uniform_cost(&maze)),
        ("astar", astar(&maze, &manhattan_to_goal)),
    ] {
        assert!(!actions.is_empty(), "{name} found no path");
        assert_eq!(replay(&maze, &actions), maze.goal, "{name} path invalid");
    }
}

#[test]
fn bfs_finds_a_minimum_length_path() {
    let maze = detour_maze();
    // Shortest detour around the wall is 8 moves.
    let actions = breadth_first(&maze);
    assert_eq!(actions.len(), 8);
}

#[test]
fn ucs_prefers_the_cheap_long_route() {
    // Cells in row 0 cost 10, everything else costs 1: the straight
    // east-then-south route becomes more expensive than going south first.
    let maze = Maze::open(5, 5, GridPos::new(0, 0), GridPos::new(4, 0))
        .with_cost(|pos| if pos.y == 0 { 10.0 } else { 1.0 });

    let actions = uniform_cost(&maze);
    assert_eq!(replay(&maze, &actions), maze.goal);
    // Down, four east steps, back up into the goal cell: 1*5 + 10.
    assert_eq!(maze.path_cost(&actions), 15.0);

    let bfs_actions = breadth_first(&maze);
    assert!(maze.path_cost(&bfs_actions) > maze.path_cost(&actions));
}

#[test]
fn astar_matches_ucs_cost_with_admissible_heuristic() {
    let maze = detour_maze();
    let ucs_actions = uniform_cost(&maze);
    let astar_actions = astar(&maze, &manhattan_to_goal);
    assert_eq!(
        maze.path_cost(&astar_actions),
        maze.path_cost(&ucs_actions)
    );
}

#[test]
fn astar_with_null_heuristic_matches_ucs_cost() {
    let maze = detour_maze();
    let ucs_actions = uniform_cost(&maze);
    let astar_actions = astar(&maze, &NullHeuristic);
    assert_eq!(
        maze.path_cost(&astar_actions),
        maze.path_cost(&ucs_actions)
    );
}

#[test]
fn astar_expands_no_more_than_ucs() {
    let maze = detour_maze();
    let ucs = uniform_cost_run(&maze);
    let astar = astar_run(&maze, &manhattan_to_goal);
    assert!(astar.telemetry.expanded <= ucs.telemetry.expanded);
}

#[test]
fn unreachable_goal_yields_empty_sequence_not_error() {
    // Goal sealed off by walls.
    let maze = Maze::open(5, 5, GridPos::new(0, 0), GridPos::new(4, 4)).with_walls([
        (3, 4),
        (3, 3),
        (4, 3),
    ]);

    assert!(depth_first(&maze).is_empty());
    assert!(breadth_first(&maze).is_empty());
    assert!(uniform_cost(&maze).is_empty());
    assert!(astar(&maze, &manhattan_to_goal).is_empty());

    let run = breadth_first_run(&maze);
    assert!(!run.goal_reached);
    assert!(run.telemetry.expanded > 0);
}

#[test]
fn initial_state_already_goal_returns_empty_with_goal_reached() {
    let maze = Maze::open(3, 3, GridPos::new(1, 1), GridPos::new(1, 1));

    let run = depth_first_run(&maze);
    assert!(run.goal_reached);
    assert!(run.actions.is_empty());
    assert_eq!(run.telemetry.expanded, 1);
}

#[test]
fn telemetry_counts_are_consistent() {
    let maze = detour_maze();
    let run = astar_run(&maze, &manhattan_to_goal);
    assert!(run.goal_reached);
    assert!(run.telemetry.generated >= run.telemetry.expanded - 1);
    assert!(run.telemetry.frontier_high_water >= 1);
}
