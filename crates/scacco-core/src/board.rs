//! The chess board: an 8×8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Piece placement for a chess position.
///
/// A `Board` is a plain value: it is `Copy`, and nothing in this crate ever
/// mutates a board another caller can still observe. Speculative moves go
/// through [`Board::with_move`], which produces a fresh board and leaves the
/// original untouched.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Row-major grid, `squares[row][col]`. Row 0 is Black's back rank.
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Return the standard starting arrangement.
    ///
    /// Black's major pieces sit on row 0 with pawns on row 1; White mirrors
    /// them on rows 7 and 6.
    pub fn starting_position() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Put `piece` on `sq`, replacing whatever was there.
    ///
    /// Intended for setting up positions; game play never calls this.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Apply a from/to move by copy-make: return a new board with the piece
    /// on `from` relocated to `to` and the origin cleared.
    ///
    /// This is the one constructor every speculative legality check goes
    /// through. An empty `from` yields an unchanged copy.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut board = *self;
        let Some(piece) = board.piece_at(from) else {
            return board;
        };
        board.squares[from.row() as usize][from.col() as usize] = None;
        board.squares[to.row() as usize][to.col() as usize] = Some(piece);
        board
    }

    /// Return the square of `color`'s king, or `None` if that king is not on
    /// the board. Positions with zero kings for a side are tolerated; with
    /// more than one (only reachable through [`Board::place`]) the first in
    /// row-major order wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.kind == PieceKind::King && p.is(color))
        })
    }

    /// Iterate over every occupied square of `color`, with its piece.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|p| p.is(color))
                .map(|p| (sq, p))
        })
    }
}

impl fmt::Display for Board {
    /// Rank/file-labelled grid from White's point of view, empty squares
    /// rendered as dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                match self.squares[row as usize][col as usize] {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        fmt::Display::fmt(self, f)
    }
}
