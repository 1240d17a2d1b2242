//! Legal move enumeration.
//!
//! Legality is a two-phase filter: a destination must be reachable by the
//! piece's movement pattern ([`reaches`]), and applying the move on a copied
//! board must not leave the mover's own king attacked ([`is_in_check`]).
//! Nothing else matters; enumeration order is unspecified and carries no
//! meaning.

mod check;
mod pseudo;

pub use check::{is_attacked, is_in_check};
pub use pseudo::{attacks, reaches};

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Enumerate every legal destination for the `color` piece standing on
/// `from`.
///
/// Returns an empty set when `from` is empty or holds an opposing piece.
/// A destination qualifies when it does not hold a same-color piece, the
/// piece's movement pattern reaches it, and the simulated move does not
/// leave `color`'s king in check.
pub fn legal_destinations(board: &Board, color: Color, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from).filter(|p| p.is(color)) else {
        return Vec::new();
    };

    Square::all()
        .filter(|&to| {
            if board.piece_at(to).is_some_and(|p| p.is(color)) {
                return false;
            }
            if !pseudo::reaches(piece, from, to, board) {
                return false;
            }
            !check::is_in_check(&board.with_move(from, to), color)
        })
        .collect()
}

/// Return `true` if `color` has at least one legal move anywhere on the
/// board. Stops at the first piece with a non-empty destination set.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_destinations(board, color, from).is_empty())
}
