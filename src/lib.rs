#[macro_use]
extern crate impl_ops;

pub mod boards;
pub mod chess_errors;
pub mod cli;
pub mod executor;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod positions;
pub mod utils;

pub use boards::Board;
pub use chess_errors::{ChessError, ChessResult};
pub use executor::{execute_move, execute_move_str};
pub use game::{Game, GameConfig};
pub use movegen::{all_attacks, legal_destinations, legal_moves, KingAttacks, SquareSet};
pub use moves::{Move, MoveType};
pub use pieces::{Color, Piece, PieceKind};
pub use positions::Square;
