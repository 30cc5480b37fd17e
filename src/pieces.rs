use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A chess piece. Pieces don't know where they stand, the board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction in which this color's pawns advance.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl PieceKind {
    pub fn glyph(self) -> char {
        use PieceKind::*;
        match self {
            King => 'K',
            Queen => 'Q',
            Rook => 'R',
            Bishop => 'B',
            Knight => 'N',
            Pawn => 'P',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PieceKind::*;
        let name = match self {
            King => "king",
            Queen => "queen",
            Rook => "rook",
            Bishop => "bishop",
            Knight => "knight",
            Pawn => "pawn",
        };
        write!(f, "{}", name)
    }
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }

    /// Glyph as shown on the text board: uppercase for white, lowercase for black.
    pub fn board_glyph(&self) -> char {
        match self.color {
            Color::White => self.glyph(),
            Color::Black => self.glyph().to_ascii_lowercase(),
        }
    }

    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Color::*;
        use PieceKind::*;
        let symbol = match (self.color, self.kind) {
            (White, King) => '\u{2654}',
            (White, Queen) => '\u{2655}',
            (White, Rook) => '\u{2656}',
            (White, Bishop) => '\u{2657}',
            (White, Knight) => '\u{2658}',
            (White, Pawn) => '\u{2659}',
            (Black, King) => '\u{265a}',
            (Black, Queen) => '\u{265b}',
            (Black, Rook) => '\u{265c}',
            (Black, Bishop) => '\u{265d}',
            (Black, Knight) => '\u{265e}',
            (Black, Pawn) => '\u{265f}',
        };
        write!(f, "{}", symbol)
    }
}
