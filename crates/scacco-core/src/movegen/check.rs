//! Square attack queries and check detection.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::pseudo::attacks;

/// Return `true` if `sq` is attacked by any piece of `by_color`.
///
/// "Attacked" is a static property of the position: the scan never asks
/// whether moving the attacker would expose its own king, because the
/// question it answers is whether a king may stand on `sq`, not whether a
/// capture there would be legal.
pub fn is_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(from, piece)| attacks(piece, from, sq, board))
}

/// Return `true` if `color`'s king is attacked by the opposing side.
///
/// A board with no king for `color` reports "not in check" rather than
/// failing; every downstream consumer treats the missing king as a
/// king that cannot be threatened.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_attacked(board, king_sq, color.opponent()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_attacked, is_in_check};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn rook_attacks_along_open_line() {
        let mut board = Board::empty();
        board.place(sq(4, 0), Piece::new(PieceKind::Rook, Color::Black));

        assert!(is_attacked(&board, sq(4, 7), Color::Black));
        assert!(is_attacked(&board, sq(0, 0), Color::Black));
        assert!(!is_attacked(&board, sq(3, 3), Color::Black));
        // Wrong color attacker.
        assert!(!is_attacked(&board, sq(4, 7), Color::White));
    }

    #[test]
    fn blocked_rook_does_not_attack_past_blocker() {
        let mut board = Board::empty();
        board.place(sq(4, 0), Piece::new(PieceKind::Rook, Color::Black));
        board.place(sq(4, 3), Piece::new(PieceKind::Pawn, Color::White));

        assert!(is_attacked(&board, sq(4, 3), Color::Black));
        assert!(!is_attacked(&board, sq(4, 4), Color::Black));
    }

    #[test]
    fn pawn_attacks_forward_diagonals_even_when_empty() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Piece::new(PieceKind::Pawn, Color::White));

        assert!(is_attacked(&board, sq(3, 3), Color::White));
        assert!(is_attacked(&board, sq(3, 5), Color::White));
        // The push square is not attacked.
        assert!(!is_attacked(&board, sq(3, 4), Color::White));
    }

    #[test]
    fn starting_position_no_check() {
        let board = Board::starting_position();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn rook_delivers_check() {
        let mut board = Board::empty();
        board.place(sq(7, 4), Piece::new(PieceKind::King, Color::White));
        board.place(sq(0, 4), Piece::new(PieceKind::Rook, Color::Black));

        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));

        // Interpose a piece and the check disappears.
        board.place(sq(3, 4), Piece::new(PieceKind::Knight, Color::Black));
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_check_respects_direction() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Piece::new(PieceKind::King, Color::White));

        // A black pawn attacks toward increasing rows.
        board.place(sq(3, 3), Piece::new(PieceKind::Pawn, Color::Black));
        assert!(is_in_check(&board, Color::White));

        let mut behind = Board::empty();
        behind.place(sq(4, 4), Piece::new(PieceKind::King, Color::White));
        behind.place(sq(5, 3), Piece::new(PieceKind::Pawn, Color::Black));
        assert!(!is_in_check(&behind, Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let mut board = Board::empty();
        board.place(sq(0, 0), Piece::new(PieceKind::Queen, Color::Black));
        board.place(sq(7, 7), Piece::new(PieceKind::Rook, Color::Black));
        assert!(!is_in_check(&board, Color::White));
    }
}
