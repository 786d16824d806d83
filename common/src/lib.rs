mod agent;
mod constants;
mod food;
mod grid;
mod outcome;
mod round;
mod snake;

pub mod util;

pub use agent::*;
pub use constants::*;
pub use food::*;
pub use grid::*;
pub use outcome::*;
pub use round::*;
pub use snake::*;
pub use util::PseudoRandom;
