//! Piece movement patterns: pseudo-legal reachability and attack coverage.
//!
//! Two predicates share the pattern logic but answer different questions:
//!
//! - [`reaches`] is the strict pseudo-legal-move test: could this piece move
//!   from here to there under its movement and blocking rules, ignoring
//!   whose king ends up in check?
//! - [`attacks`] is the looser attack test used for check detection: does
//!   this piece cover that square? The two differ only for pawns, which
//!   capture (and therefore attack) diagonally but push straight ahead.
//!
//! Neither predicate looks at the side to move or at friendly occupancy of
//! the destination; both of those are the caller's concern. Callers also
//! guarantee that `piece` really stands on `from`.

use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Return `true` if `piece`, standing on `from`, could move to `to` by its
/// movement pattern and blocking rules. King safety is not considered here.
pub fn reaches(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_reaches(piece.color, from, to, board),
        PieceKind::Knight => knight_pattern(from, to),
        PieceKind::Bishop => bishop_pattern(from, to) && path_clear(board, from, to),
        PieceKind::Rook => rook_pattern(from, to) && path_clear(board, from, to),
        PieceKind::Queen => {
            (rook_pattern(from, to) || bishop_pattern(from, to)) && path_clear(board, from, to)
        }
        PieceKind::King => king_pattern(from, to),
    }
}

/// Return `true` if `piece`, standing on `from`, attacks `to`.
///
/// Identical to [`reaches`] except for pawns: a pawn attacks exactly its two
/// forward-diagonal squares, occupied or not. Its forward pushes attack
/// nothing — a push needs an empty destination, so no piece standing on a
/// square ahead of a pawn is ever threatened by it.
pub fn attacks(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    match piece.kind {
        PieceKind::Pawn => {
            let (d_row, d_col) = deltas(from, to);
            d_row == forward(piece.color) && d_col.abs() == 1
        }
        _ => reaches(piece, from, to, board),
    }
}

/// Row delta of a single forward step for `color`'s pawns.
#[inline]
const fn forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row a pawn of `color` starts on, from which the double push is allowed.
#[inline]
const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

fn pawn_reaches(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let dir = forward(color);

    if d_col == 0 {
        // Single push onto an empty square.
        if d_row == dir {
            return board.piece_at(to).is_none();
        }
        // Double push from the starting row; both squares must be empty.
        if d_row == 2 * dir && from.row() == pawn_start_row(color) {
            let passed = from
                .offset(dir, 0)
                .is_some_and(|mid| board.piece_at(mid).is_none());
            return passed && board.piece_at(to).is_none();
        }
        return false;
    }

    // Diagonal step, legal only as a capture of the other color.
    d_row == dir && d_col.abs() == 1 && board.piece_at(to).is_some_and(|p| !p.is(color))
}

#[inline]
fn knight_pattern(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

#[inline]
fn king_pattern(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}

#[inline]
fn rook_pattern(from: Square, to: Square) -> bool {
    from.row() == to.row() || from.col() == to.col()
}

#[inline]
fn bishop_pattern(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() == d_col.abs()
}

/// Return `true` if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, a column, or a diagonal; the walk steps
/// one square at a time toward `to` and stops short of it, so destination
/// occupancy is never inspected.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let step = (d_row.signum(), d_col.signum());

    let mut sq = from;
    loop {
        // Stepping toward `to` along a shared line cannot leave the board.
        sq = match sq.offset(step.0, step.1) {
            Some(next) => next,
            None => return false,
        };
        if sq == to {
            return true;
        }
        if board.piece_at(sq).is_some() {
            return false;
        }
    }
}
