use crate::board::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Row/column delta of one step.
    #[inline]
    pub fn drow_dcol(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    #[inline]
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }

    /// Coordinates one step from `from` in this direction. May be off the board.
    #[inline]
    pub fn step(self, from: Coords) -> Coords {
        let (dr, dc) = self.drow_dcol();
        Coords::new(from.row + dr, from.col + dc)
    }

    /// Direction of a single step from `from` to `to`, `None` if they are not adjacent.
    pub fn between(from: Coords, to: Coords) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.step(from) == to)
    }
}

/// Decide whether `requested` may replace `current` for a snake of `snake_len` cells.
///
/// A reversal is refused while there is a body to run into; a single cell may turn anywhere.
/// Nothing is committed here, the caller applies the result on the next tick.
pub fn resolve(current: Direction, requested: Direction, snake_len: usize) -> Option<Direction> {
    if requested.is_opposite(current) && snake_len > 1 {
        None
    } else {
        Some(requested)
    }
}
