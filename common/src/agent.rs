use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::grid::{manhattan, Cell, Grid};
use crate::snake::{Snake, DIRECTIONS, Direction};

/// Greedy one-step move selector. No lookahead beyond filtering moves
/// that are immediately fatal against the opponent's tick-start body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicAgent {
    /// When set, moves landing on the food are discarded while the
    /// opponent's first three segments already cover it.
    pub avoid_contested_food: bool,
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        HeuristicAgent {
            avoid_contested_food: false,
        }
    }
}

impl HeuristicAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contested_avoidance() -> Self {
        HeuristicAgent {
            avoid_contested_food: true,
        }
    }

    /// Choose the snake's next direction.
    ///
    /// Candidates are enumerated in the fixed Up, Down, Left, Right order
    /// and kept when the destination is in bounds and inside neither body.
    /// With no candidate left the current direction is returned unchanged;
    /// the snake then dies on the next collision check instead of crashing
    /// here. Otherwise the candidate strictly minimizing the Manhattan
    /// distance to the food wins, first enumerated on ties.
    pub fn decide(
        &self,
        grid: &Grid,
        snake: &Snake,
        food: Cell,
        other: Option<&Snake>,
    ) -> Direction {
        let head = snake.head();

        let mut valid: Vec<(Direction, Cell)> = Vec::with_capacity(4);
        for direction in DIRECTIONS {
            let dest = grid.step(head, direction);
            if !grid.in_bounds(dest) {
                continue;
            }
            if snake.contains(dest) {
                continue;
            }
            if other.is_some_and(|o| o.contains(dest)) {
                continue;
            }
            valid.push((direction, dest));
        }

        if valid.is_empty() {
            return snake.direction;
        }

        if self.avoid_contested_food {
            if let Some(other) = other {
                let contested = other.body.iter().take(3).any(|&cell| cell == food);
                if contested {
                    valid.retain(|&(_, dest)| dest != food);
                }
            }
        }

        let mut best: Option<(Direction, i32)> = None;
        for (direction, dest) in valid {
            let distance = manhattan(dest, food);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((direction, distance));
            }
        }

        match best {
            Some((direction, _)) => direction,
            // Contested-food filtering emptied the set; keep going.
            None => snake.direction,
        }
    }
}

/// Number of free cells reachable from `from` by axis-aligned steps,
/// treating both snake bodies as walls. A cell inside a body counts as
/// unreachable, so flooding from an occupied cell yields 0. Computed as a
/// capability for extended agents; `decide` does not consult it.
pub fn reachable_space(grid: &Grid, from: Cell, snake: &Snake, other: Option<&Snake>) -> usize {
    let blocked =
        |cell: Cell| snake.contains(cell) || other.is_some_and(|o| o.contains(cell));

    let mut visited: HashSet<Cell> = HashSet::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();
    queue.push_back(from);
    let mut space = 0;

    while let Some(cell) = queue.pop_front() {
        if visited.contains(&cell) || !grid.in_bounds(cell) || blocked(cell) {
            continue;
        }
        visited.insert(cell);
        space += 1;

        for neighbor in grid.neighbors(cell) {
            queue.push_back(neighbor);
        }
    }

    space
}
