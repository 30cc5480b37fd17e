use crate::chess_errors::*;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use std::fmt::{self, Display};

// ---------------------------------------------
// Board
// ---------------------------------------------

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mailbox representation of a game: one slot per square plus the state that
/// belongs to the game as a whole.
///
/// The side to move can't be changed from outside the crate:
///
/// ```compile_fail
/// let mut board = chess_rules::Board::standard_setup();
/// board.set_turn(chess_rules::Color::Black);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pieces: [Option<Piece>; 64],
    turn: Color,
    en_passant: Option<Square>,
    history: Vec<String>,
}

impl Board {
    /// A board without any pieces, white to move. Useful to set up custom positions.
    pub fn empty() -> Board {
        Board {
            pieces: array_init(|_| None),
            turn: Color::White,
            en_passant: None,
            history: Vec::new(),
        }
    }

    /// Returns a board with the pieces placed on standard chess starting positions
    pub fn standard_setup() -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            let col = (sq.file() as u8 - b'A') as usize;
            let piece = match sq.rank() {
                1 => Some(Piece::new(BACK_RANK[col], Color::White)),
                2 => Some(Piece::new(PieceKind::Pawn, Color::White)),
                7 => Some(Piece::new(PieceKind::Pawn, Color::Black)),
                8 => Some(Piece::new(BACK_RANK[col], Color::Black)),
                _ => None,
            };
            board.set(sq, piece);
        }
        board
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.pieces[sq]
    }

    /// Overwrites whatever stands on `sq`. Does no rule checking at all, moves
    /// should go through `execute_move`.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.pieces[sq] = piece;
    }

    /// Like `get`, but takes the square by name.
    pub fn piece_at(&self, name: &str) -> ChessResult<Option<Piece>> {
        let sq: Square = name.parse()?;
        Ok(self.get(sq))
    }

    /// All pieces of one side together with their squares.
    pub fn squares_with(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.pieces[sq] {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Only for setting up test positions. During play the turn changes by
    /// executing moves, nothing else.
    #[cfg(test)]
    pub(crate) fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub(crate) fn record(&mut self, entry: String) {
        self.history.push(entry);
    }

    pub(crate) fn flip_turn(&mut self) {
        self.turn = self.turn.opposite();
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard_setup()
    }
}

// Displays the board as a text grid:
//
//  |A|B|C|D|E|F|G|H|
// -+-+-+-+-+-+-+-+-+-
// 8|r|n|b|q|k|b|n|r|8
// ...
//
// White pieces are uppercase, black pieces lowercase.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = " |A|B|C|D|E|F|G|H| ";
        let hline = format!("{}-", "-+".repeat(9));

        writeln!(f, "{}", header)?;
        for rank in (1..=BOARD_SIZE).rev() {
            writeln!(f, "{}", hline)?;
            write!(f, "{}", rank)?;
            for sq in Square::all().filter(|sq| sq.rank() == rank) {
                let c = self.get(sq).map_or(' ', |p| p.board_glyph());
                write!(f, "|{}", c)?;
            }
            writeln!(f, "|{}", rank)?;
        }
        writeln!(f, "{}", hline)?;
        write!(f, "{}", header)
    }
}
