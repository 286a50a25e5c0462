use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quest_core::{manhattan, GridPos, SearchSpace, Successor};
use quest_graph::{astar, breadth_first, uniform_cost};

struct Maze {
    size: i32,
    walls: HashSet<GridPos>,
    start: GridPos,
    goal: GridPos,
}

/// An n x n grid where every odd column is walled except for one gap,
/// forcing a serpentine route.
fn serpentine(size: i32) -> Maze {
    let mut walls = HashSet::new();
    for x in (1..size).step_by(2) {
        let gap = if (x / 2) % 2 == 0 { size - 1 } else { 0 };
        for y in 0..size {
            if y != gap {
                walls.insert(GridPos::new(x, y));
            }
        }
    }
    Maze {
        size,
        walls,
        start: GridPos::new(0, 0),
        goal: GridPos::new(size - 1, size - 1),
    }
}

impl SearchSpace for Maze {
    type State = GridPos;
    type Action = GridPos;

    fn initial_state(&self) -> GridPos {
        self.start
    }

    fn is_goal(&self, state: &GridPos) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &GridPos) -> Vec<Successor<GridPos, GridPos>> {
        let candidates = [
            GridPos::new(state.x, state.y - 1),
            GridPos::new(state.x + 1, state.y),
            GridPos::new(state.x, state.y + 1),
            GridPos::new(state.x - 1, state.y),
        ];
        candidates
            .into_iter()
            .filter(|p| {
                p.x >= 0 && p.y >= 0 && p.x < self.size && p.y < self.size
                    && !self.walls.contains(p)
            })
            .map(|p| Successor::new(p, p, 1.0))
            .collect()
    }

    fn path_cost(&self, actions: &[GridPos]) -> f64 {
        actions.len() as f64
    }
}

fn bench_maze_search(c: &mut Criterion) {
    let maze = serpentine(41);
    let to_goal = |state: &GridPos, problem: &Maze| f64::from(manhattan(*state, problem.goal));

    c.bench_function("quest-graph/breadth_first(41x41)", |b| {
        b.iter(|| black_box(breadth_first(&maze).len()))
    });
    c.bench_function("quest-graph/uniform_cost(41x41)", |b| {
        b.iter(|| black_box(uniform_cost(&maze).len()))
    });
    c.bench_function("quest-graph/astar(41x41)", |b| {
        b.iter(|| black_box(astar(&maze, &to_goal).len()))
    });
}

criterion_group!(benches, bench_maze_search);
criterion_main!(benches);
