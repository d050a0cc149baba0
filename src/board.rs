/// Identifier of one board position, row-major, starting at 1.
pub type Cell = u32;

/// Grid coordinates. Signed so that a step off the board is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub row: i32,
    pub col: i32,
}

impl Coords {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Square N×N board. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: i32,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self { size: size as i32 }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Number of cells, which is also the largest cell identifier.
    pub fn cell_count(&self) -> Cell {
        (self.size * self.size) as Cell
    }

    #[inline]
    pub fn is_out_of_bounds(&self, coords: Coords) -> bool {
        coords.row < 0 || coords.col < 0 || coords.row >= self.size || coords.col >= self.size
    }

    /// Cell identifier at `coords`. Callers check bounds first.
    #[inline]
    pub fn cell_at(&self, coords: Coords) -> Cell {
        debug_assert!(!self.is_out_of_bounds(coords), "{coords:?} is off the board");
        (coords.row * self.size + coords.col + 1) as Cell
    }

    /// Inverse of [`Board::cell_at`], `None` for identifiers outside `1..=N²`.
    pub fn coords_of(&self, cell: Cell) -> Option<Coords> {
        if cell == 0 || cell > self.cell_count() {
            return None;
        }
        let idx = (cell - 1) as i32;
        Some(Coords::new(idx / self.size, idx % self.size))
    }

    /// Starting position of a fresh snake: `(round(N/3), round(N/3))`.
    pub fn start_coords(&self) -> Coords {
        let third = (f64::from(self.size) / 3.0).round() as i32;
        Coords::new(third, third)
    }

    /// Rows of cell identifiers, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell>> + '_ {
        (0..self.size).map(move |row| (0..self.size).map(move |col| self.cell_at(Coords::new(row, col))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major_from_one() {
        let board = Board::new(5);
        assert_eq!(board.cell_at(Coords::new(0, 0)), 1);
        assert_eq!(board.cell_at(Coords::new(0, 4)), 5);
        assert_eq!(board.cell_at(Coords::new(2, 2)), 13);
        assert_eq!(board.cell_at(Coords::new(4, 4)), 25);
        assert_eq!(board.cell_count(), 25);
    }

    #[test]
    fn bounds() {
        let board = Board::new(5);
        assert!(!board.is_out_of_bounds(Coords::new(0, 0)));
        assert!(!board.is_out_of_bounds(Coords::new(4, 4)));
        assert!(board.is_out_of_bounds(Coords::new(-1, 0)));
        assert!(board.is_out_of_bounds(Coords::new(0, -1)));
        assert!(board.is_out_of_bounds(Coords::new(5, 0)));
        assert!(board.is_out_of_bounds(Coords::new(0, 5)));
    }

    #[test]
    fn coords_of_inverts_cell_at() {
        let board = Board::new(7);
        for cell in 1..=board.cell_count() {
            let coords = board.coords_of(cell).unwrap();
            assert_eq!(board.cell_at(coords), cell);
        }
        assert_eq!(board.coords_of(0), None);
        assert_eq!(board.coords_of(50), None);
    }

    #[test]
    fn start_is_a_third_of_the_way_in() {
        assert_eq!(Board::new(5).start_coords(), Coords::new(2, 2));
        assert_eq!(Board::new(15).start_coords(), Coords::new(5, 5));
        assert_eq!(Board::new(4).start_coords(), Coords::new(1, 1));
    }

    #[test]
    fn rows_cover_every_cell_once() {
        let board = Board::new(4);
        let all: Vec<Cell> = board.rows().flatten().collect();
        assert_eq!(all, (1..=16).collect::<Vec<_>>());
    }
}
