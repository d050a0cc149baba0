use std::time::Duration;

use thiserror::Error;

pub mod board;
pub mod body;
pub mod direction;
pub mod engine;
pub mod food;
pub mod game;
pub mod input;
pub mod random;
pub mod render;
pub mod reversal;
pub mod ticker;

pub use board::{Board, Cell, Coords};
pub use body::{Segment, SnakeBody};
pub use direction::Direction;
pub use engine::{GameOverReason, Meal, StepOutcome, World};
pub use food::{Food, Growth};
pub use game::{Game, GameStatus, TickResult};
pub use random::RandomSource;
pub use ticker::{TickPeriod, Ticker};

/// Smallest board on which the starting food cell is still on the board.
pub const MIN_BOARD_SIZE: usize = 4;
pub const MAX_BOARD_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Cells per side of the square board.
    pub board_size: usize,
    /// Chance that a newly placed food is a reversing one.
    pub reversal_probability: f64,
    /// Milliseconds between ticks while running.
    pub tick_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 15,
            reversal_probability: 0.3,
            tick_millis: 150,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }
        if !(0.0..=1.0).contains(&self.reversal_probability) {
            return Err(ConfigError::ReversalProbability(self.reversal_probability));
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }

    pub fn tick_period(&self) -> TickPeriod {
        TickPeriod::Every(Duration::from_millis(self.tick_millis))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size {0} is below the minimum of {min}", min = MIN_BOARD_SIZE)]
    BoardTooSmall(usize),

    #[error("board size {0} is above the maximum of {max}", max = MAX_BOARD_SIZE)]
    BoardTooLarge(usize),

    #[error("reversal probability {0} is outside [0, 1]")]
    ReversalProbability(f64),

    #[error("tick period must be at least one millisecond")]
    ZeroTickPeriod,
}
