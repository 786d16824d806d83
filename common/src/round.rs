use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::agent::HeuristicAgent;
use crate::constants::STARTING_SNAKE_LENGTH;
use crate::food::spawn_food;
use crate::grid::{Cell, Grid};
use crate::outcome::{evaluate, Mode, RoundOutcome, RoundPhase};
use crate::snake::{Direction, Snake, SnakeColor};
use crate::util::PseudoRandom;

/// What happened during one tick, for consumers that want more than the
/// resulting state (logging, replays, UIs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    SnakeTurned { snake_id: u32, direction: Direction },
    FoodEaten { snake_id: u32, at: Cell },
    FoodSpawned { at: Cell },
    RoundEnded { outcome: RoundOutcome },
}

/// All mutable state of one round. Owned by whoever drives the loop;
/// nothing is shared across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub grid: Grid,
    pub tick: u32,
    pub snake1: Snake,
    /// Present only in two-player rounds.
    pub snake2: Option<Snake>,
    pub food: Cell,
    pub score1: u32,
    pub score2: u32,
    pub phase: RoundPhase,
    pub rng: PseudoRandom,
    pub agent: HeuristicAgent,
}

impl RoundState {
    /// Start a round on the standard arena with the fixed starting bodies:
    /// snake 1 in the top-left heading right, snake 2 (two-player only) in
    /// the bottom-right heading left. The seed makes food placement, and
    /// therefore the whole round, reproducible.
    pub fn new(mode: Mode, seed: u64) -> Self {
        let grid = Grid::standard();

        let snake1 = Snake::new(
            [Cell::new(100, 100), Cell::new(80, 100), Cell::new(60, 100)],
            Direction::Right,
            SnakeColor::Green,
        );
        let snake2 = match mode {
            Mode::TwoPlayer => Some(Snake::new(
                [Cell::new(700, 500), Cell::new(720, 500), Cell::new(740, 500)],
                Direction::Left,
                SnakeColor::Blue,
            )),
            Mode::SinglePlayer => None,
        };
        debug_assert_eq!(snake1.len(), STARTING_SNAKE_LENGTH);

        let mut rng = PseudoRandom::new(seed);
        let food = spawn_food(&mut rng, &grid, &snake1, snake2.as_ref());

        RoundState {
            grid,
            tick: 0,
            snake1,
            snake2,
            food,
            score1: 0,
            score2: 0,
            phase: RoundPhase::Active,
            rng,
            agent: HeuristicAgent::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.snake2 {
            Some(_) => Mode::TwoPlayer,
            None => Mode::SinglePlayer,
        }
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.score1, self.score2)
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RoundPhase::Terminal(outcome) => Some(outcome),
            RoundPhase::Active => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, RoundPhase::Terminal(_))
    }

    /// Snapshot of the full round state for non-Rust consumers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Advance the simulation by exactly one tick. A terminal round is
    /// left untouched and yields no events.
    ///
    /// Order within the tick: both agents decide from tick-start bodies
    /// (snake 2 never sees snake 1's post-move body), both snakes advance,
    /// food consumption resolves per snake (eat grows by skipping that
    /// snake's shrink), a replacement food spawns if any was eaten, and
    /// the collision evaluator runs last.
    pub fn tick_forward(&mut self) -> Vec<RoundEvent> {
        let mut out = Vec::new();
        if self.is_terminal() {
            return out;
        }

        let dir1 = self
            .agent
            .decide(&self.grid, &self.snake1, self.food, self.snake2.as_ref());
        let dir2 = self
            .snake2
            .as_ref()
            .map(|s2| self.agent.decide(&self.grid, s2, self.food, Some(&self.snake1)));

        if dir1 != self.snake1.direction {
            out.push(RoundEvent::SnakeTurned {
                snake_id: 0,
                direction: dir1,
            });
        }
        self.snake1.advance(&self.grid, dir1);

        if let Some(s2) = self.snake2.as_mut() {
            let dir2 = dir2.expect("direction decided for snake 2");
            if dir2 != s2.direction {
                out.push(RoundEvent::SnakeTurned {
                    snake_id: 1,
                    direction: dir2,
                });
            }
            s2.advance(&self.grid, dir2);
        }

        let mut food_consumed = false;
        if self.snake1.head() == self.food {
            self.score1 += 1;
            food_consumed = true;
            debug!("snake 1 ate food at ({}, {})", self.food.x, self.food.y);
            out.push(RoundEvent::FoodEaten {
                snake_id: 0,
                at: self.food,
            });
        } else {
            self.snake1.shrink();
        }

        if let Some(s2) = self.snake2.as_mut() {
            if s2.head() == self.food {
                self.score2 += 1;
                food_consumed = true;
                debug!("snake 2 ate food at ({}, {})", self.food.x, self.food.y);
                out.push(RoundEvent::FoodEaten {
                    snake_id: 1,
                    at: self.food,
                });
            } else {
                s2.shrink();
            }
        }

        if food_consumed {
            let food = spawn_food(&mut self.rng, &self.grid, &self.snake1, self.snake2.as_ref());
            self.food = food;
            debug!("food spawned at ({}, {})", food.x, food.y);
            out.push(RoundEvent::FoodSpawned { at: food });
        }

        if let Some(outcome) = evaluate(
            &self.grid,
            &self.snake1,
            self.snake2.as_ref(),
            (self.score1, self.score2),
        ) {
            debug!("round ended on tick {}: {}", self.tick, outcome);
            self.phase = RoundPhase::Terminal(outcome);
            out.push(RoundEvent::RoundEnded { outcome });
        }

        self.tick += 1;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_obeys_the_starting_layout() {
        let round = RoundState::new(Mode::TwoPlayer, 42);
        assert_eq!(round.snake1.head(), Cell::new(100, 100));
        assert_eq!(round.snake1.direction, Direction::Right);
        let s2 = round.snake2.as_ref().unwrap();
        assert_eq!(s2.head(), Cell::new(700, 500));
        assert_eq!(s2.direction, Direction::Left);
        assert_eq!(round.scores(), (0, 0));
        assert_eq!(round.current_tick(), 0);
        assert!(!round.is_terminal());
        assert!(!round.snake1.contains(round.food));
        assert!(!s2.contains(round.food));
    }

    #[test]
    fn single_player_round_has_no_second_snake() {
        let round = RoundState::new(Mode::SinglePlayer, 7);
        assert_eq!(round.mode(), Mode::SinglePlayer);
        assert!(round.snake2.is_none());
    }

    #[test]
    fn same_seed_gives_identical_rounds() {
        let mut a = RoundState::new(Mode::TwoPlayer, 1234);
        let mut b = RoundState::new(Mode::TwoPlayer, 1234);
        for _ in 0..200 {
            assert_eq!(a.tick_forward(), b.tick_forward());
            assert_eq!(a, b);
            if a.is_terminal() {
                break;
            }
        }
    }

    #[test]
    fn bodies_have_no_duplicates_while_active() {
        let mut round = RoundState::new(Mode::TwoPlayer, 99);
        for _ in 0..500 {
            round.tick_forward();
            if round.is_terminal() {
                break;
            }
            let snakes = [Some(&round.snake1), round.snake2.as_ref()];
            for snake in snakes.into_iter().flatten() {
                let mut cells: Vec<Cell> = snake.body.iter().copied().collect();
                cells.sort_by_key(|c| (c.x, c.y));
                cells.dedup();
                assert_eq!(cells.len(), snake.len(), "duplicate cell in active body");
            }
        }
    }

    #[test]
    fn terminal_round_ignores_further_ticks() {
        let mut round = RoundState::new(Mode::SinglePlayer, 3);
        round.phase = RoundPhase::Terminal(RoundOutcome::GameOver);
        let before = round.clone();
        assert!(round.tick_forward().is_empty());
        assert_eq!(round, before);
    }

    #[test]
    fn state_serializes_to_json() {
        let round = RoundState::new(Mode::TwoPlayer, 8);
        let json = round.to_json().unwrap();
        assert!(json.contains("\"snake1\""));
        let back: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, round);
    }
}
