use crate::boards::*;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use lazy_static::lazy_static;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------
// Move generation
// ---------------------------------------------------------------------
//
// Everything in here only reads the board. Destinations are returned as
// ordered sets so callers get a stable listing.

pub type SquareSet = BTreeSet<Square>;

const KNIGHT_OFFSETS: [Offset; 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

const KING_OFFSETS: [Offset; 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// All on-board squares reached from `sq` by the given offsets.
fn offset_targets(sq: Square, offsets: &[Offset]) -> Vec<Square> {
    offsets.iter().filter_map(|off| sq + off).collect()
}

fn offset_table(offsets: &'static [Offset]) -> [Vec<Square>; 64] {
    let squares: Vec<Square> = Square::all().collect();
    array_init(|i| offset_targets(squares[i], offsets))
}

lazy_static! {
    static ref KNIGHT_TARGETS: [Vec<Square>; 64] = offset_table(&KNIGHT_OFFSETS);
}

lazy_static! {
    static ref KING_NEIGHBOURS: [Vec<Square>; 64] = offset_table(&KING_OFFSETS);
}

/// How kings contribute to an attack set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KingAttacks {
    /// Every neighbouring square, no safety check. Never recurses.
    Simplified,
    /// The king's real moves. Looks at the other side's attacks, which are
    /// in turn always computed with `Simplified`.
    Full,
}

/// Returns the squares the piece on `sq` may legally move to.
/// Empty squares have no destinations.
pub fn legal_destinations(board: &Board, sq: Square) -> SquareSet {
    let piece = match board.get(sq) {
        Some(p) => p,
        None => return SquareSet::new(),
    };

    match piece.kind {
        PieceKind::Knight => knight_moves(board, piece, sq),
        PieceKind::Rook => rook_moves(board, piece, sq),
        PieceKind::Bishop => bishop_moves(board, piece, sq),
        PieceKind::Queen => queen_moves(board, piece, sq),
        PieceKind::Pawn => pawn_moves(board, piece, sq),
        PieceKind::King => full_king_moves(board, piece, sq),
    }
}

/// Every (from, to) pair available to the side to move.
pub fn legal_moves(board: &Board) -> Vec<(Square, Square)> {
    board
        .squares_with(board.turn())
        .flat_map(|(from, _)| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Squares threatened by the pieces of `color`.
pub fn all_attacks(board: &Board, color: Color, kings: KingAttacks) -> SquareSet {
    let mut attacked = SquareSet::new();
    for (sq, piece) in board.squares_with(color) {
        let threatened = match (piece.kind, kings) {
            (PieceKind::Pawn, _) => pawn_attacks(board, piece, sq),
            (PieceKind::King, KingAttacks::Simplified) => simplified_king_attacks(sq),
            (PieceKind::King, KingAttacks::Full) => full_king_moves(board, piece, sq),
            _ => legal_destinations(board, sq),
        };
        attacked.extend(threatened);
    }
    attacked
}

/// Target is on the board (guaranteed by the caller) and not blocked by a friend.
fn is_free_or_enemy(board: &Board, piece: Piece, target: Square) -> bool {
    board.get(target).map_or(true, |other| other.is_enemy_of(&piece))
}

fn knight_moves(board: &Board, piece: Piece, sq: Square) -> SquareSet {
    KNIGHT_TARGETS[sq]
        .iter()
        .copied()
        .filter(|&t| is_free_or_enemy(board, piece, t))
        .collect()
}

/// Walks each direction until the board edge or a piece. The first enemy
/// piece on the way is included, friendly pieces are not.
fn sliding_moves(board: &Board, piece: Piece, sq: Square, directions: &[Offset]) -> SquareSet {
    let mut res = SquareSet::new();
    for dir in directions {
        let mut current = sq;
        while let Some(next) = current + dir {
            match board.get(next) {
                None => {
                    res.insert(next);
                    current = next;
                }
                Some(other) => {
                    if other.is_enemy_of(&piece) {
                        res.insert(next);
                    }
                    break;
                }
            }
        }
    }
    res
}

fn rook_moves(board: &Board, piece: Piece, sq: Square) -> SquareSet {
    sliding_moves(board, piece, sq, &ROOK_DIRECTIONS)
}

fn bishop_moves(board: &Board, piece: Piece, sq: Square) -> SquareSet {
    sliding_moves(board, piece, sq, &BISHOP_DIRECTIONS)
}

fn queen_moves(board: &Board, piece: Piece, sq: Square) -> SquareSet {
    let mut res = rook_moves(board, piece, sq);
    res.extend(bishop_moves(board, piece, sq));
    res
}

fn pawn_moves(board: &Board, piece: Piece, sq: Square) -> SquareSet {
    let forward = piece.color.forward();
    let mut res = SquareSet::new();

    if let Some(one) = sq + (0, forward) {
        if board.get(one).is_none() {
            res.insert(one);
            if !piece.has_moved {
                if let Some(two) = sq + (0, 2 * forward) {
                    if board.get(two).is_none() {
                        res.insert(two);
                    }
                }
            }
        }
    }

    res.extend(pawn_attacks(board, piece, sq));
    res
}

/// The forward diagonals a pawn can capture on right now: enemy occupied
/// squares and the en passant square.
pub fn pawn_attacks(board: &Board, piece: Piece, sq: Square) -> SquareSet {
    let forward = piece.color.forward();
    [(-1, forward), (1, forward)]
        .iter()
        .filter_map(|off| sq + off)
        .filter(|&t| match board.get(t) {
            Some(other) => other.is_enemy_of(&piece),
            None => board.en_passant() == Some(t),
        })
        .collect()
}

/// Squares next to `sq`, whether or not they are safe or occupied.
pub fn simplified_king_attacks(sq: Square) -> SquareSet {
    KING_NEIGHBOURS[sq].iter().copied().collect()
}

/// King steps that are neither blocked by a friend nor attacked by the enemy.
pub fn full_king_moves(board: &Board, piece: Piece, sq: Square) -> SquareSet {
    let enemy_attacks = all_attacks(board, piece.color.opposite(), KingAttacks::Simplified);

    // Castling would be added here, it is not supported.
    KING_NEIGHBOURS[sq]
        .iter()
        .copied()
        .filter(|t| !enemy_attacks.contains(t))
        .filter(|&t| is_free_or_enemy(board, piece, t))
        .collect()
}
