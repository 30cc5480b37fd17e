use crate::chess_errors::*;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Chessboard squares on a 8x8 board.
//
// Numbered as follows:
//
//     A  B  C  D  E  F  G  H
//   ---------------------------
// 8 | 0  1  2  3  4  5  6  7  | 8
// 7 | 8  9  10 11 12 13 14 15 | 7
// 6 | 16 17 18 19 20 21 22 23 | 6
// 5 | 24 25 26 27 28 29 30 31 | 5
// 4 | 32 33 34 35 36 37 38 39 | 4
// 3 | 40 41 42 43 44 45 46 47 | 3
// 2 | 48 49 50 51 52 53 54 55 | 2
// 1 | 56 57 58 59 60 61 62 63 | 1
//   ---------------------------
//     A  B  C  D  E  F  G  H
//
// ---------------------------------------------
// Squares
// ---------------------------------------------

pub const BOARD_SIZE: u8 = 8;
const FILES: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// A square on the board. Only ever holds one of the 64 valid values, every
/// fallible constructor rejects the rest with `InvalidSquare`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

/// (file delta, rank delta), rank delta positive towards rank 8.
pub type Offset = (i8, i8);

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ChessError::InvalidSquare(s.to_string());
        let normalized = s.trim().to_ascii_uppercase();
        let mut chars = normalized.chars();

        let file = chars.next().ok_or_else(err)?;
        let rank = chars
            .next()
            .and_then(|r| r.to_digit(10))
            .ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }

        Square::new(file, rank as u8).map_err(|_| err())
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

pub struct SquareIterator(u8);

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > 63 {
            None
        } else {
            self.0 += 1;
            Some(Square(self.0 - 1))
        }
    }
}

impl Square {
    /// Builds a square from a column letter (either case) and a row number.
    pub fn new(file: char, rank: u8) -> ChessResult<Square> {
        let col = FILES
            .iter()
            .position(|&c| c == file.to_ascii_uppercase())
            .ok_or_else(|| ChessError::InvalidSquare(format!("{}{}", file, rank)))?;
        if !(1..=BOARD_SIZE).contains(&rank) {
            return Err(ChessError::InvalidSquare(format!("{}{}", file, rank)));
        }
        Ok(Square::from_row_col(BOARD_SIZE - rank, col as u8))
    }

    /// Row 0 is rank 8, col 0 is file A. Callers guarantee both are below 8.
    fn from_row_col(row: u8, col: u8) -> Square {
        debug_assert!(Square::in_board(row as i16, col as i16));
        Square(row * BOARD_SIZE + col)
    }

    pub const fn to_row_col(self) -> (u8, u8) {
        (self.0 / BOARD_SIZE, self.0 % BOARD_SIZE)
    }

    pub const fn in_board(row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < BOARD_SIZE as i16 && col < BOARD_SIZE as i16
    }

    pub fn file(self) -> char {
        FILES[self.to_row_col().1 as usize]
    }

    pub fn rank(self) -> u8 {
        BOARD_SIZE - self.to_row_col().0
    }

    /// The square `d_file` columns right and `d_rank` rows up, if it is still
    /// on the board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let (row, col) = self.to_row_col();
        let new_row = row as i16 - d_rank as i16;
        let new_col = col as i16 + d_file as i16;
        if Square::in_board(new_row, new_col) {
            Some(Square::from_row_col(new_row as u8, new_col as u8))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, row by row from A8 to H1.
    pub fn all() -> SquareIterator {
        SquareIterator(0)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl<T> ops::Index<Square> for [T; 64] {
    type Output = T;

    fn index(&self, index: Square) -> &T {
        &self[index.0 as usize]
    }
}

impl<T> ops::IndexMut<Square> for [T; 64] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.0 as usize]
    }
}

impl_op_ex!(+ |a: &Square, b: &Offset| -> Option<Square> { a.offset(b.0, b.1) });
