use crate::grid::{Cell, Grid};
use crate::snake::Snake;
use crate::util::PseudoRandom;

/// Pick a random unoccupied cell for food, keeping a one-cell safe zone
/// around both snakes: neither the cell nor any of its four neighbors may
/// touch a snake body. Retries until a cell qualifies; a saturated board
/// would loop forever, which is an accepted limitation rather than a
/// handled error.
pub fn spawn_food(
    rng: &mut PseudoRandom,
    grid: &Grid,
    snake1: &Snake,
    snake2: Option<&Snake>,
) -> Cell {
    let occupied =
        |cell: Cell| snake1.contains(cell) || snake2.is_some_and(|s| s.contains(cell));

    loop {
        let cell = Cell::new(
            rng.next_below(grid.cols()) as i32 * grid.block,
            rng.next_below(grid.rows()) as i32 * grid.block,
        );

        if occupied(cell) {
            continue;
        }
        if grid.neighbors(cell).iter().any(|&n| occupied(n)) {
            continue;
        }
        return cell;
    }
}
