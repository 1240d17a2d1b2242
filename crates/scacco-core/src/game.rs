//! The turn state machine: positions, game states, and move application.

use tracing::{debug, info};

use crate::board::Board;
use crate::color::Color;
use crate::error::IllegalMove;
use crate::movegen;
use crate::square::Square;

/// A board together with the side to move: the unit of state every rules
/// query operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
}

impl Position {
    /// The standard starting position, White to move.
    pub fn initial() -> Position {
        Position {
            board: Board::starting_position(),
            side_to_move: Color::White,
        }
    }

    /// Wrap an arbitrary board with a side to move.
    pub fn new(board: Board, side_to_move: Color) -> Position {
        Position {
            board,
            side_to_move,
        }
    }

    /// The piece placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Every legal destination for the piece on `from`, for the side to
    /// move. Empty when `from` is empty or holds an opposing piece.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        movegen::legal_destinations(&self.board, self.side_to_move, from)
    }

    /// Return `true` if the side to move stands in check.
    pub fn in_check(&self) -> bool {
        movegen::is_in_check(&self.board, self.side_to_move)
    }
}

/// Where the game stands: either somebody is to move, or somebody won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Non-terminal; `Color` moves next. Check is not a separate state —
    /// it is reported alongside each applied move.
    ToMove(Color),
    /// Terminal; `winner` delivered checkmate.
    Checkmate {
        /// The side that won.
        winner: Color,
    },
}

/// The result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The game after the move.
    pub game: Game,
    /// Whether the side now to move stands in check. Also `true` when the
    /// move delivered checkmate; consult [`Game::state`] to tell the two
    /// apart.
    pub check: bool,
}

/// A position plus a [`GameState`], advanced one validated move at a time.
///
/// `Game` is an immutable value: [`Game::apply_move`] returns a new game and
/// never touches the one it was called on, so a failed attempt leaves the
/// caller's state bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    position: Position,
    state: GameState,
}

impl Game {
    /// Start a fresh game: standard setup, White to move.
    pub fn new() -> Game {
        Game {
            position: Position::initial(),
            state: GameState::ToMove(Color::White),
        }
    }

    /// Resume from an arbitrary position, deriving the state: if the side
    /// to move is checkmated the game is already over, won by the opponent.
    pub fn from_position(position: Position) -> Game {
        let side = position.side_to_move();
        let mated = position.in_check()
            && !movegen::has_any_legal_move(position.board(), side);
        let state = if mated {
            GameState::Checkmate {
                winner: side.opponent(),
            }
        } else {
            GameState::ToMove(side)
        };
        Game { position, state }
    }

    /// The current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Validate and apply the move `from` → `to`.
    ///
    /// Validation covers, in order: the game must not be over, `from` must
    /// hold a piece of the side to move, `to` must not hold a friendly
    /// piece, and `to` must be a legal destination (movement pattern,
    /// blocking, capture rules, and king safety in one check). On success
    /// the piece is relocated, checkmate is detected, and the turn passes
    /// to the opponent.
    ///
    /// # Errors
    ///
    /// [`IllegalMove`] when any validation step fails; `self` is unchanged.
    pub fn apply_move(&self, from: Square, to: Square) -> Result<MoveOutcome, IllegalMove> {
        let mover = match self.state {
            GameState::ToMove(color) => color,
            GameState::Checkmate { winner } => return Err(IllegalMove::GameOver { winner }),
        };

        let board = self.position.board();
        let piece = board
            .piece_at(from)
            .ok_or(IllegalMove::EmptyOrigin { from })?;
        if !piece.is(mover) {
            return Err(IllegalMove::WrongSide {
                from,
                side_to_move: mover,
            });
        }
        if board.piece_at(to).is_some_and(|p| p.is(mover)) {
            return Err(IllegalMove::FriendlyDestination { to });
        }
        if !movegen::legal_destinations(board, mover, from).contains(&to) {
            debug!(%from, %to, side = %mover, "rejected move");
            return Err(IllegalMove::Unreachable { from, to });
        }

        let board = board.with_move(from, to);
        let opponent = mover.opponent();
        let check = movegen::is_in_check(&board, opponent);

        let state = if check && !movegen::has_any_legal_move(&board, opponent) {
            info!(winner = %mover, "checkmate");
            GameState::Checkmate { winner: mover }
        } else {
            // No legal reply without check is not detected as a terminal
            // outcome; the opponent simply stays on move.
            GameState::ToMove(opponent)
        };

        debug!(%from, %to, side = %mover, in_check = check, "move applied");
        Ok(MoveOutcome {
            game: Game {
                position: Position::new(board, opponent),
                state,
            },
            check,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
