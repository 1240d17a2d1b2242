//! Chess pieces: a kind paired with a color.

use std::fmt;

use crate::color::Color;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds, pawns first.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the conventional letter for this kind (lowercase).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A colored chess piece. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Return `true` if this piece belongs to `color`.
    #[inline]
    pub const fn is(self, color: Color) -> bool {
        matches!(
            (self.color, color),
            (Color::White, Color::White) | (Color::Black, Color::Black)
        )
    }
}

impl fmt::Display for Piece {
    /// Uppercase for White, lowercase for Black.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.kind.letter();
        match self.color {
            Color::White => write!(f, "{}", base.to_ascii_uppercase()),
            Color::Black => write!(f, "{base}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceKind};
    use crate::color::Color;

    #[test]
    fn new_accessors() {
        let piece = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(piece.kind, PieceKind::Knight);
        assert_eq!(piece.color, Color::Black);
    }

    #[test]
    fn color_predicate() {
        let piece = Piece::new(PieceKind::Queen, Color::White);
        assert!(piece.is(Color::White));
        assert!(!piece.is(Color::Black));
    }

    #[test]
    fn letters_unique() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            let c = kind.letter();
            assert!(!seen.contains(&c), "duplicate letter '{c}'");
            seen.push(c);
        }
    }

    #[test]
    fn display_case_encodes_color() {
        assert_eq!(format!("{}", Piece::new(PieceKind::King, Color::White)), "K");
        assert_eq!(format!("{}", Piece::new(PieceKind::King, Color::Black)), "k");
        assert_eq!(format!("{}", Piece::new(PieceKind::Pawn, Color::White)), "P");
        assert_eq!(format!("{}", Piece::new(PieceKind::Pawn, Color::Black)), "p");
    }
}
