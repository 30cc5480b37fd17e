use crate::boards::*;
use crate::chess_errors::*;
use crate::executor::*;
use crate::movegen::*;
use crate::pieces::*;
use crate::positions::*;

/// Names shown for the two sides.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub white_name: String,
    pub black_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white_name: "player 1".to_string(),
            black_name: "player 2".to_string(),
        }
    }
}

/// A game as seen from the outside: squares go in and come out as text.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
}

impl Game {
    pub fn new(config: GameConfig) -> Game {
        Game {
            config,
            board: Board::standard_setup(),
        }
    }

    /// Continues from an already set up board.
    pub fn from_board(config: GameConfig, board: Board) -> Game {
        Game { config, board }
    }

    /// Legal destinations of the piece on `square`, in board order (rank 8 first).
    pub fn get_moves(&self, square: &str) -> ChessResult<Vec<String>> {
        let sq: Square = square.parse()?;
        Ok(legal_destinations(&self.board, sq)
            .into_iter()
            .map(|s| s.to_string())
            .collect())
    }

    /// Makes a move and returns the history line describing it.
    pub fn move_piece(&mut self, from: &str, to: &str) -> ChessResult<String> {
        let mv = execute_move_str(&mut self.board, from, to)?;
        Ok(mv.describe())
    }

    /// Every move available to the side to move.
    pub fn all_moves(&self) -> Vec<(Square, Square)> {
        legal_moves(&self.board)
    }

    pub fn display(&self) -> String {
        self.board.to_string()
    }

    pub fn current_player(&self) -> &str {
        self.player_name(self.board.turn())
    }

    pub fn player_name(&self, color: Color) -> &str {
        match color {
            Color::White => &self.config.white_name,
            Color::Black => &self.config.black_name,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[String] {
        self.board.history()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}
