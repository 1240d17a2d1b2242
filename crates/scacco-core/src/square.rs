//! Board squares addressed by (row, column).
//!
//! Row 0 is the rank nearest Black's start (rank 8 in over-the-board terms);
//! row 7 is nearest White's start (rank 1). White pawns advance toward
//! decreasing row index, Black pawns toward increasing row index.

use std::fmt;

/// A square on the 8×8 board, identified by row and column in `0..=7`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square, returning `None` if either coordinate is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Return the row (0 = Black's back rank, 7 = White's back rank).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Return the column (0 = queenside, 7 = kingside).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the square displaced by `(d_row, d_col)`, or `None` if that
    /// falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    /// Coordinate text: column as a letter `a`-`h`, rank as `1`-`8`
    /// counted from White's side, so (6, 4) prints as "e2".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, 8 - self.row)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn new_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn accessors() {
        let sq = Square::new(6, 4).unwrap();
        assert_eq!(sq.row(), 6);
        assert_eq!(sq.col(), 4);
    }

    #[test]
    fn offset_on_board() {
        let sq = Square::new(4, 4).unwrap();
        assert_eq!(sq.offset(-1, 0), Square::new(3, 4));
        assert_eq!(sq.offset(2, -3), Square::new(6, 1));
        assert_eq!(sq.offset(0, 0), Some(sq));
    }

    #[test]
    fn offset_off_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(8, 0), None);
    }

    #[test]
    fn all_covers_board_once() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), Square::COUNT);
        let mut deduped = squares.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), Square::COUNT);
    }

    #[test]
    fn display_coordinates() {
        // (6, 4) is the square a White king's pawn starts on.
        assert_eq!(format!("{}", Square::new(6, 4).unwrap()), "e2");
        assert_eq!(format!("{}", Square::new(0, 0).unwrap()), "a8");
        assert_eq!(format!("{}", Square::new(7, 7).unwrap()), "h1");
    }

    #[test]
    fn debug_shows_coordinate() {
        assert_eq!(format!("{:?}", Square::new(4, 4).unwrap()), "Square(e4)");
    }
}
