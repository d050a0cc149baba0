use tracing::debug;

use crate::board::{Board, Cell, Coords};
use crate::body::SnakeBody;
use crate::direction::Direction;
use crate::random::RandomSource;

/// Cells between the starting head and the first food, in cell-id space.
pub const STARTING_FOOD_OFFSET: Cell = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    /// Eating this food flips the snake's direction of travel.
    pub reversing: bool,
}

impl Food {
    /// The first, ordinary food of a round, a few cells after the starting head.
    pub fn starting(start: Cell) -> Self {
        Self {
            cell: start + STARTING_FOOD_OFFSET,
            reversing: false,
        }
    }
}

/// Pick the next food uniformly among cells that are neither occupied nor the
/// previous food, and roll its reversing flag.
///
/// Returns `None` when no such cell exists, which ends the round.
pub fn place<R: RandomSource + ?Sized>(
    board: &Board,
    snake: &SnakeBody,
    previous: Cell,
    reversal_probability: f64,
    rng: &mut R,
) -> Option<Food> {
    let total = board.cell_count();
    let previous_is_free = board.coords_of(previous).is_some() && !snake.contains(previous);
    let blocked = snake.len() as Cell + Cell::from(previous_is_free);
    if blocked >= total {
        return None;
    }

    let cell = loop {
        let candidate = rng.int_in_range(1, total);
        if !snake.contains(candidate) && candidate != previous {
            break candidate;
        }
    };
    let reversing = rng.chance() < reversal_probability;
    debug!(cell, reversing, "food placed");
    Some(Food { cell, reversing })
}

/// What happened when the snake tried to lengthen after eating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Grew { cell: Cell },
    /// The cell behind the tail is off the board.
    OffBoard { coords: Coords },
    /// The cell behind the tail is part of the snake already.
    Blocked { cell: Cell },
}

impl Growth {
    pub fn grew(self) -> bool {
        matches!(self, Self::Grew { .. })
    }
}

/// One step behind the tail, against the tail's own heading.
pub fn growth_coords(snake: &SnakeBody, travel: Direction) -> Coords {
    snake.tail_heading(travel).opposite().step(snake.tail().coords)
}

/// Add a node behind the tail if the cell there is free and on the board.
pub fn grow(board: &Board, snake: &mut SnakeBody, travel: Direction) -> Growth {
    let coords = growth_coords(snake, travel);
    if board.is_out_of_bounds(coords) {
        debug!(?coords, "growth skipped, behind the tail is off the board");
        return Growth::OffBoard { coords };
    }
    let cell = board.cell_at(coords);
    if snake.contains(cell) {
        debug!(cell, "growth skipped, behind the tail is occupied");
        return Growth::Blocked { cell };
    }
    snake.grow_at_tail(cell, coords);
    Growth::Grew { cell }
}
