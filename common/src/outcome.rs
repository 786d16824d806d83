use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    SinglePlayer,
    TwoPlayer,
}

/// End-of-round result. `GameOver` is the single-player analogue of a
/// loss: there is no opponent to declare the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Player1Wins,
    Player2Wins,
    Draw,
    GameOver,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Player1Wins => write!(f, "Snake 1 Wins!"),
            RoundOutcome::Player2Wins => write!(f, "Snake 2 Wins!"),
            RoundOutcome::Draw => write!(f, "It's a draw!"),
            RoundOutcome::GameOver => write!(f, "Game Over!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Active,
    Terminal(RoundOutcome),
}

/// Collision check run after both snakes have moved. Rules are evaluated
/// in a fixed order and the first match ends the round: snake 1 wall,
/// snake 2 wall, snake 1 self, snake 2 self, then inter-snake contact.
/// Wall and self collisions award the round to the opposing snake (or end
/// a single-player round); inter-snake contact of either head with any
/// cell of the other body is resolved by comparing scores.
pub fn evaluate(
    grid: &Grid,
    snake1: &Snake,
    snake2: Option<&Snake>,
    scores: (u32, u32),
) -> Option<RoundOutcome> {
    let snake1_loses = match snake2 {
        Some(_) => RoundOutcome::Player2Wins,
        None => RoundOutcome::GameOver,
    };

    if !grid.in_bounds(snake1.head()) {
        return Some(snake1_loses);
    }
    if let Some(s2) = snake2 {
        if !grid.in_bounds(s2.head()) {
            return Some(RoundOutcome::Player1Wins);
        }
    }

    if snake1.collides_with_self() {
        return Some(snake1_loses);
    }
    if let Some(s2) = snake2 {
        if s2.collides_with_self() {
            return Some(RoundOutcome::Player1Wins);
        }

        if snake1.collides_with(s2) || s2.collides_with(snake1) {
            let outcome = match scores.0.cmp(&scores.1) {
                std::cmp::Ordering::Greater => RoundOutcome::Player1Wins,
                std::cmp::Ordering::Less => RoundOutcome::Player2Wins,
                std::cmp::Ordering::Equal => RoundOutcome::Draw,
            };
            return Some(outcome);
        }
    }

    None
}
