use common::{
    Cell, Direction, Grid, HeuristicAgent, PseudoRandom, RoundPhase, RoundState, Snake,
    SnakeColor,
};
use terminal::render::{
    arena::ArenaRenderer, standard_renderer::StandardRenderer, types::CharDimensions,
};

fn round_on(grid: Grid, snake1: Snake, snake2: Option<Snake>, food: Cell) -> RoundState {
    RoundState {
        grid,
        tick: 0,
        snake1,
        snake2,
        food,
        score1: 0,
        score2: 0,
        phase: RoundPhase::Active,
        rng: PseudoRandom::new(1),
        agent: HeuristicAgent::new(),
    }
}

#[test]
fn test_2x1_rendering() {
    // 10x10 board; snake head at logical (5,5), body at (4,5), food (7,7).
    let grid = Grid::new(200, 200, 20);
    let snake = Snake::new(
        [Cell::new(100, 100), Cell::new(80, 100)],
        Direction::Right,
        SnakeColor::Green,
    );
    let state = round_on(grid, snake, None, Cell::new(140, 140));

    let char_dims = CharDimensions::new(2, 1);
    let renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let lines = renderer.render(&state).into_lines();

    // Height stays logical, width doubles.
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0].len(), 20);

    // Head at (5,5) -> chars 10,11 on row 5
    assert_eq!(lines[5][10], '█');
    assert_eq!(lines[5][11], '█');

    // Body at (4,5) -> chars 8,9 on row 5, green shade
    assert_eq!(lines[5][8], '▓');
    assert_eq!(lines[5][9], '▓');

    // Food at (7,7) -> chars 14,15 on row 7
    assert_eq!(lines[7][14], '●');
    assert_eq!(lines[7][15], '●');
}

#[test]
fn test_1x1_rendering_with_two_snakes() {
    let grid = Grid::new(100, 100, 20);
    let snake1 = Snake::new(
        [Cell::new(40, 40), Cell::new(20, 40)],
        Direction::Right,
        SnakeColor::Green,
    );
    let snake2 = Snake::new(
        [Cell::new(80, 0), Cell::new(80, 20)],
        Direction::Up,
        SnakeColor::Blue,
    );
    let state = round_on(grid, snake1, Some(snake2), Cell::new(60, 60));

    let char_dims = CharDimensions::new(1, 1);
    let renderer = ArenaRenderer::new(StandardRenderer::new(char_dims));
    let lines = renderer.render(&state).into_lines();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].len(), 5);

    // Snake 1 head and body
    assert_eq!(lines[2][2], '█');
    assert_eq!(lines[2][1], '▓');

    // Snake 2 head and blue body shade
    assert_eq!(lines[0][4], '█');
    assert_eq!(lines[1][4], '▒');

    // Food
    assert_eq!(lines[3][3], '●');
}

#[test]
fn out_of_bounds_head_is_not_drawn() {
    // A head that just left the arena (wall collision tick) must not
    // panic the renderer or wrap around the board.
    let grid = Grid::new(100, 100, 20);
    let snake = Snake::new(
        [Cell::new(-20, 40), Cell::new(0, 40), Cell::new(20, 40)],
        Direction::Left,
        SnakeColor::Green,
    );
    let state = round_on(grid, snake, None, Cell::new(60, 60));

    let renderer = ArenaRenderer::new(StandardRenderer::new(CharDimensions::new(1, 1)));
    let lines = renderer.render(&state).into_lines();

    // The in-bounds body cells render as head-less segments; nothing in
    // the leftmost column row comes from the escaped head.
    assert_eq!(lines[2][0], '▓');
    assert_eq!(lines[2][1], '▓');
    assert_eq!(lines[2][4], ' ');
}
