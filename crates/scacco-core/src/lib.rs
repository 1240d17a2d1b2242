//! Core chess rules: board representation, move legality, check and
//! checkmate detection, and the turn state machine.
//!
//! The crate is a pure rules engine. Every query is a function of its
//! explicit inputs, boards are `Copy` values that are never mutated in
//! place, and speculative moves run on copies. Castling, en passant, pawn
//! promotion, and draw rules are deliberately out of scope.

mod board;
mod color;
mod error;
mod game;
mod movegen;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use error::IllegalMove;
pub use game::{Game, GameState, MoveOutcome, Position};
pub use movegen::{
    attacks, has_any_legal_move, is_attacked, is_in_check, legal_destinations, reaches,
};
pub use piece::{Piece, PieceKind};
pub use square::Square;
