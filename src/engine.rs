//! Per-tick movement: next head, collision checks, commit, food handling.

use tracing::trace;

use crate::board::Board;
use crate::body::{Segment, SnakeBody};
use crate::direction::Direction;
use crate::food::{self, Food, Growth};
use crate::random::RandomSource;
use crate::reversal;

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The head left the board.
    Wall,
    /// The head ran into an occupied cell.
    SelfCollision,
    /// Nowhere left to put food. The player cleared the board.
    BoardFilled,
}

/// Everything that happened when the head landed on food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub eaten: Food,
    pub growth: Growth,
    /// True if the eaten food turned the snake around.
    pub reversed: bool,
    /// True if no new food could be placed.
    pub board_filled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate(Meal),
    Collided(GameOverReason),
}

/// Board, snake, food and travel direction of one round.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) board: Board,
    pub(crate) snake: SnakeBody,
    pub(crate) food: Food,
    pub(crate) direction: Direction,
}

impl World {
    /// Fresh round: one-cell snake a third of the way in, heading right, with
    /// ordinary food a few cells further along.
    pub fn start(board: Board) -> Self {
        let coords = board.start_coords();
        let cell = board.cell_at(coords);
        Self {
            board,
            snake: SnakeBody::new(Segment::new(cell, coords)),
            food: Food::starting(cell),
            direction: Direction::Right,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one tick in the committed direction.
    ///
    /// Self collision is tested before the tail moves, so running into the
    /// current tail cell ends the round even though that cell would free up.
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        reversal_probability: f64,
        rng: &mut R,
    ) -> StepOutcome {
        let next = self.direction.step(self.snake.head().coords);
        if self.board.is_out_of_bounds(next) {
            return StepOutcome::Collided(GameOverReason::Wall);
        }
        let cell = self.board.cell_at(next);
        if self.snake.contains(cell) {
            return StepOutcome::Collided(GameOverReason::SelfCollision);
        }

        self.snake.advance_head(cell, next);
        // Eating re-grows behind the new tail, so the tail always moves first.
        self.snake.release_tail();
        trace!(cell, direction = ?self.direction, "head advanced");

        if cell != self.food.cell {
            return StepOutcome::Moved;
        }

        let eaten = self.food;
        let growth = food::grow(&self.board, &mut self.snake, self.direction);
        if eaten.reversing {
            self.direction = reversal::reverse(&mut self.snake, self.direction);
        }
        let next_food = food::place(
            &self.board,
            &self.snake,
            eaten.cell,
            reversal_probability,
            rng,
        );
        if let Some(food) = next_food {
            self.food = food;
        }

        StepOutcome::Ate(Meal {
            eaten,
            growth,
            reversed: eaten.reversing,
            board_filled: next_food.is_none(),
        })
    }
}
