use common::{Cell, RoundState};

use super::traits::GameObjectRenderer;
use super::types::CharGrid;

/// Renders a full round snapshot into a character grid using only the
/// core's read accessors; no simulation logic lives here.
pub struct ArenaRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> ArenaRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, state: &RoundState) -> CharGrid {
        let block = state.grid.block;
        let mut grid = CharGrid::new(
            state.grid.cols() as usize,
            state.grid.rows() as usize,
            self.renderer.char_dimensions(),
        );

        let to_logical = |cell: Cell| ((cell.x / block) as usize, (cell.y / block) as usize);

        if state.grid.in_bounds(state.food) {
            let (x, y) = to_logical(state.food);
            grid.set_logical_point(x, y, &self.renderer.render_food());
        }

        let snakes = [Some(&state.snake1), state.snake2.as_ref()];
        for snake in snakes.into_iter().flatten() {
            for (i, &cell) in snake.body.iter().enumerate() {
                if !state.grid.in_bounds(cell) {
                    continue;
                }
                let (x, y) = to_logical(cell);
                let pattern = self.renderer.render_snake_segment(i == 0, snake.color);
                grid.set_logical_point(x, y, &pattern);
            }
        }

        grid
    }
}
