use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed enumeration order used everywhere a tick considers candidate
/// moves. Tie-breaks in the agent depend on this order staying stable.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Identity tag for presentation; snake 1 is green, snake 2 is blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakeColor {
    Green,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Body cells, head first, tail last.
    pub body: VecDeque<Cell>,
    pub direction: Direction,
    pub color: SnakeColor,
}

impl Snake {
    pub fn new(body: impl IntoIterator<Item = Cell>, direction: Direction, color: SnakeColor) -> Self {
        Snake {
            body: body.into_iter().collect(),
            direction,
            color,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Prepend the new head one block from the current head. The tail is
    /// not removed here; growing is the default and `shrink` is the
    /// explicit counterpart, matching the eat/no-eat branch in the driver.
    pub fn advance(&mut self, grid: &Grid, direction: Direction) {
        let head = grid.step(self.head(), direction);
        self.direction = direction;
        self.body.push_front(head);
    }

    /// Remove the tail cell. Calling this on an empty body is a driver
    /// sequencing bug and fails fast.
    pub fn shrink(&mut self) {
        self.body
            .pop_back()
            .expect("shrink called on empty snake body");
    }

    /// True iff the head cell appears again later in the body.
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// True iff this snake's head lies anywhere in `other`'s body,
    /// head-to-head included.
    pub fn collides_with(&self, other: &Snake) -> bool {
        other.contains(self.head())
    }
}
