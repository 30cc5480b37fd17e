//! Describing the moves that have been made on a board.
use crate::pieces::*;
use crate::positions::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    /// The piece as it stood before moving.
    pub piece: Piece,
    pub kind: MoveType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveType {
    Standard,
    Capture(Piece),
    /// Captured pawn stood beside the start square, not on `end`.
    EnPassant(Piece),
    PawnTwostep,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture = match self.kind {
            MoveType::Capture(_) | MoveType::EnPassant(_) => "x",
            _ => "",
        };
        write!(
            f,
            "{}{}{}{}",
            self.piece.glyph(),
            self.start,
            capture,
            self.end
        )
    }
}

impl Move {
    pub fn new(start: Square, end: Square, piece: Piece, kind: MoveType) -> Self {
        Move {
            start,
            end,
            piece,
            kind,
        }
    }

    pub fn captured(&self) -> Option<Piece> {
        match self.kind {
            MoveType::Capture(p) | MoveType::EnPassant(p) => Some(p),
            _ => None,
        }
    }

    /// Line written into the board history.
    pub fn describe(&self) -> String {
        format!(
            "Moved {} {} from {} to {}.",
            self.piece.color, self.piece.kind, self.start, self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sq;

    #[test]
    fn test_display_and_describe() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);

        let quiet = Move::new(sq("B1"), sq("C3"), knight, MoveType::Standard);
        assert_eq!(quiet.to_string(), "NB1C3");
        assert_eq!(quiet.describe(), "Moved white knight from B1 to C3.");
        assert_eq!(quiet.captured(), None);

        let take = Move::new(sq("C3"), sq("D5"), knight, MoveType::Capture(pawn));
        assert_eq!(take.to_string(), "NC3xD5");
        assert_eq!(take.captured(), Some(pawn));
    }
}
