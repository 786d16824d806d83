/// Arena width in pixels
pub const ARENA_WIDTH: i32 = 800;

/// Arena height in pixels
pub const ARENA_HEIGHT: i32 = 600;

/// Side length of one grid cell in pixels; every position is a multiple of this
pub const BLOCK_SIZE: i32 = 20;

/// Default tick interval in milliseconds for round loops
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Starting body length of every snake
pub const STARTING_SNAKE_LENGTH: usize = 3;
