//! Error types for move application.

use crate::color::Color;
use crate::square::Square;

/// The single error a move attempt can produce.
///
/// Always recoverable: the [`Game`](crate::Game) it was raised from is
/// untouched, and the expected reaction is to prompt for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// The game already ended in checkmate.
    #[error("the game is over: {winner} won")]
    GameOver {
        /// The side that delivered checkmate.
        winner: Color,
    },

    /// There is no piece on the origin square.
    #[error("no piece on {from}")]
    EmptyOrigin {
        /// The empty origin square.
        from: Square,
    },

    /// The origin square holds a piece of the side not on move.
    #[error("the piece on {from} does not belong to {side_to_move}")]
    WrongSide {
        /// The origin square.
        from: Square,
        /// The side whose turn it is.
        side_to_move: Color,
    },

    /// The destination square holds a piece of the moving side.
    #[error("{to} is occupied by a friendly piece")]
    FriendlyDestination {
        /// The occupied destination square.
        to: Square,
    },

    /// The destination is not a legal one for the piece: out of pattern,
    /// behind a blocker, or leaving the mover's own king attacked.
    #[error("{from} to {to} is not a legal move")]
    Unreachable {
        /// The origin square.
        from: Square,
        /// The rejected destination square.
        to: Square,
    },
}
