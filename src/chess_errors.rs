use crate::pieces::Color;
use crate::positions::Square;
use thiserror::Error;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Every way a request into the engine can be rejected. No variant is ever
/// produced after the board has been touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("Invalid square '{0}', expected a column A-H followed by a row 1-8")]
    InvalidSquare(String),

    #[error("No piece at {0}")]
    NoPieceAtSource(Square),

    #[error("Cannot move piece at {square}! It is {turn}'s turn, not {color}'s")]
    WrongTurn {
        square: Square,
        color: Color,
        turn: Color,
    },

    #[error("Moving from {from} to {to} is not a valid move")]
    IllegalMove { from: Square, to: Square },
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;
