use serde::{Deserialize, Serialize};

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, BLOCK_SIZE};
use crate::snake::Direction;

/// One grid position, in pixels. Both coordinates are multiples of the
/// grid's block size while the cell is on the board; out-of-bounds cells
/// (e.g. a head that just left the arena) are still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

/// Manhattan distance between two cells, in pixels.
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// The discrete coordinate space the game is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub block: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32, block: i32) -> Self {
        Grid {
            width,
            height,
            block,
        }
    }

    /// The 800x600 arena with 20px cells used by standard rounds.
    pub const fn standard() -> Self {
        Grid::new(ARENA_WIDTH, ARENA_HEIGHT, BLOCK_SIZE)
    }

    /// Number of cell columns on the board.
    pub fn cols(&self) -> u32 {
        (self.width / self.block) as u32
    }

    /// Number of cell rows on the board.
    pub fn rows(&self) -> u32 {
        (self.height / self.block) as u32
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// The cell one block away from `cell` in `direction`. Screen
    /// coordinates: y grows downward.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        match direction {
            Direction::Up => Cell::new(cell.x, cell.y - self.block),
            Direction::Down => Cell::new(cell.x, cell.y + self.block),
            Direction::Left => Cell::new(cell.x - self.block, cell.y),
            Direction::Right => Cell::new(cell.x + self.block, cell.y),
        }
    }

    /// The four axis-aligned neighbors of `cell`, in Up, Down, Left, Right
    /// order. Neighbors may be out of bounds.
    pub fn neighbors(&self, cell: Cell) -> [Cell; 4] {
        [
            self.step(cell, Direction::Up),
            self.step(cell, Direction::Down),
            self.step(cell, Direction::Left),
            self.step(cell, Direction::Right),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        let grid = Grid::standard();
        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(780, 580)));
        assert!(!grid.in_bounds(Cell::new(-20, 100)));
        assert!(!grid.in_bounds(Cell::new(800, 100)));
        assert!(!grid.in_bounds(Cell::new(100, 600)));
    }

    #[test]
    fn step_moves_one_block() {
        let grid = Grid::standard();
        let cell = Cell::new(100, 100);
        assert_eq!(grid.step(cell, Direction::Up), Cell::new(100, 80));
        assert_eq!(grid.step(cell, Direction::Down), Cell::new(100, 120));
        assert_eq!(grid.step(cell, Direction::Left), Cell::new(80, 100));
        assert_eq!(grid.step(cell, Direction::Right), Cell::new(120, 100));
    }

    #[test]
    fn neighbors_follow_enumeration_order() {
        let grid = Grid::standard();
        let n = grid.neighbors(Cell::new(100, 100));
        assert_eq!(
            n,
            [
                Cell::new(100, 80),
                Cell::new(100, 120),
                Cell::new(80, 100),
                Cell::new(120, 100),
            ]
        );
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(100, 100);
        let b = Cell::new(160, 40);
        assert_eq!(manhattan(a, b), 120);
        assert_eq!(manhattan(b, a), 120);
        assert_eq!(manhattan(a, a), 0);
    }
}
