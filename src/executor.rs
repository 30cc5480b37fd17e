use crate::boards::*;
use crate::chess_errors::*;
use crate::movegen::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use tracing::{debug, trace};

// -------------------------------------
// Move execution
// ------------------------------------

/// Same as `execute_move`, but takes the squares by name (either case).
pub fn execute_move_str(board: &mut Board, from: &str, to: &str) -> ChessResult<Move> {
    let from: Square = from.parse()?;
    let to: Square = to.parse()?;
    execute_move(board, from, to)
}

/// Validates the move and applies it. On error the board is left untouched.
pub fn execute_move(board: &mut Board, from: Square, to: Square) -> ChessResult<Move> {
    let mv = validate_move(board, from, to).map_err(|e| {
        debug!(%from, %to, error = %e, "move rejected");
        e
    })?;

    if let MoveType::EnPassant(_) = mv.kind {
        if let Some(behind) = to + (0, -mv.piece.color.forward()) {
            trace!(square = %behind, "removing pawn taken en passant");
            board.set(behind, None);
        }
    }

    let mut moved = mv.piece;
    moved.has_moved = true;
    board.set(from, None);
    board.set(to, Some(moved));

    let skipped = match mv.kind {
        MoveType::PawnTwostep => from + (0, mv.piece.color.forward()),
        _ => None,
    };
    board.set_en_passant(skipped);

    board.record(mv.describe());
    board.flip_turn();

    debug!(
        from = %mv.start,
        to = %mv.end,
        piece = %mv.piece.kind,
        color = %mv.piece.color,
        kind = ?mv.kind,
        "move executed"
    );
    Ok(mv)
}

/// Every check that can reject a move, done before anything is mutated.
/// Classifies the move on success.
fn validate_move(board: &Board, from: Square, to: Square) -> ChessResult<Move> {
    let piece = board.get(from).ok_or(ChessError::NoPieceAtSource(from))?;

    if piece.color != board.turn() {
        return Err(ChessError::WrongTurn {
            square: from,
            color: piece.color,
            turn: board.turn(),
        });
    }

    if !legal_destinations(board, from).contains(&to) {
        return Err(ChessError::IllegalMove { from, to });
    }

    Ok(Move::new(from, to, piece, classify(board, piece, from, to)))
}

fn classify(board: &Board, piece: Piece, from: Square, to: Square) -> MoveType {
    if let Some(target) = board.get(to) {
        return MoveType::Capture(target);
    }
    if piece.kind != PieceKind::Pawn {
        return MoveType::Standard;
    }

    if board.en_passant() == Some(to) {
        let behind = to + (0, -piece.color.forward());
        if let Some(captured) = behind.and_then(|sq| board.get(sq)) {
            if captured.kind == PieceKind::Pawn && captured.is_enemy_of(&piece) {
                return MoveType::EnPassant(captured);
            }
        }
    }

    if (to.rank() as i8 - from.rank() as i8).abs() == 2 {
        MoveType::PawnTwostep
    } else {
        MoveType::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::sq;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn place(board: &mut Board, name: &str, kind: PieceKind, color: Color) {
        board.set(sq(name), Some(Piece::new(kind, color)));
    }

    #[test]
    fn test_simple_move() {
        let mut b = Board::standard_setup();
        let mv = execute_move(&mut b, sq("B1"), sq("C3")).unwrap();
        assert_eq!(mv.kind, MoveType::Standard);

        assert_eq!(b.get(sq("B1")), None);
        let knight = b.get(sq("C3")).unwrap();
        assert_eq!(knight.kind, PieceKind::Knight);
        assert!(knight.has_moved);
        assert_eq!(b.turn(), Color::Black);
        assert_eq!(b.en_passant(), None);
        assert_eq!(b.history(), &["Moved white knight from B1 to C3.".to_string()]);
    }

    #[test]
    fn test_round_trip() {
        let mut b = Board::standard_setup();
        execute_move_str(&mut b, "g1", "f3").unwrap();
        assert_eq!(legal_destinations(&b, sq("G1")), SquareSet::new());
        let from_f3 = legal_destinations(&b, sq("F3"));
        assert!(from_f3.contains(&sq("G1")));
        assert!(from_f3.contains(&sq("E5")));
        assert!(from_f3.contains(&sq("H4")));
    }

    #[test]
    fn test_en_passant_square() {
        let mut b = Board::standard_setup();
        let mv = execute_move_str(&mut b, "A2", "A4").unwrap();
        assert_eq!(mv.kind, MoveType::PawnTwostep);
        assert_eq!(b.en_passant(), Some(sq("A3")));

        execute_move_str(&mut b, "B7", "B5").unwrap();
        assert_eq!(b.en_passant(), Some(sq("B6")));

        execute_move_str(&mut b, "A4", "A5").unwrap();
        assert_eq!(b.en_passant(), None);

        execute_move_str(&mut b, "G8", "F6").unwrap();
        assert_eq!(b.en_passant(), None);
    }

    #[test]
    fn test_en_passant_capture() {
        let mut b = Board::standard_setup();
        for (from, to) in &[("E2", "E4"), ("A7", "A6"), ("E4", "E5"), ("D7", "D5")] {
            execute_move_str(&mut b, from, to).unwrap();
        }
        assert_eq!(b.en_passant(), Some(sq("D6")));
        assert!(legal_destinations(&b, sq("E5")).contains(&sq("D6")));

        let mv = execute_move_str(&mut b, "E5", "D6").unwrap();
        assert_eq!(
            mv.kind,
            MoveType::EnPassant(Piece {
                kind: PieceKind::Pawn,
                color: Color::Black,
                has_moved: true,
            })
        );
        assert_eq!(b.get(sq("D5")), None);
        assert_eq!(b.get(sq("E5")), None);
        assert_eq!(b.get(sq("D6")).unwrap().color, Color::White);
        assert_eq!(b.squares_with(Color::Black).count(), 15);
        assert_eq!(b.en_passant(), None);
    }

    #[test]
    fn test_en_passant_expires() {
        let mut b = Board::standard_setup();
        for (from, to) in &[
            ("E2", "E4"),
            ("A7", "A6"),
            ("E4", "E5"),
            ("D7", "D5"),
            ("H2", "H3"),
            ("A6", "A5"),
        ] {
            execute_move_str(&mut b, from, to).unwrap();
        }
        assert_eq!(b.en_passant(), None);
        assert!(!legal_destinations(&b, sq("E5")).contains(&sq("D6")));
        assert!(matches!(
            execute_move_str(&mut b, "E5", "D6"),
            Err(ChessError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_capture() {
        let mut b = Board::empty();
        place(&mut b, "D4", PieceKind::Rook, Color::White);
        place(&mut b, "D7", PieceKind::Bishop, Color::Black);
        let mv = execute_move_str(&mut b, "D4", "D7").unwrap();
        assert_eq!(
            mv.captured(),
            Some(Piece::new(PieceKind::Bishop, Color::Black))
        );
        assert_eq!(b.squares_with(Color::Black).count(), 0);
        assert_eq!(b.get(sq("D7")).unwrap().kind, PieceKind::Rook);
    }

    #[test]
    fn test_turn_alternation() {
        let mut b = Board::standard_setup();
        assert_eq!(b.turn(), Color::White);

        let before = b.clone();
        assert_eq!(
            execute_move_str(&mut b, "E7", "E5"),
            Err(ChessError::WrongTurn {
                square: sq("E7"),
                color: Color::Black,
                turn: Color::White,
            })
        );
        assert_eq!(b, before);

        execute_move_str(&mut b, "E2", "E4").unwrap();
        assert_eq!(b.turn(), Color::Black);
        assert!(matches!(
            execute_move_str(&mut b, "D2", "D4"),
            Err(ChessError::WrongTurn { .. })
        ));
        assert_eq!(b.turn(), Color::Black);
        execute_move_str(&mut b, "E7", "E5").unwrap();
        assert_eq!(b.turn(), Color::White);
    }

    #[test]
    fn test_rejections_leave_board_unchanged() {
        let mut b = Board::standard_setup();
        let before = b.clone();

        assert_eq!(
            execute_move_str(&mut b, "A1", "A1"),
            Err(ChessError::IllegalMove {
                from: sq("A1"),
                to: sq("A1")
            })
        );
        assert_eq!(
            execute_move_str(&mut b, "B1", "B2"),
            Err(ChessError::IllegalMove {
                from: sq("B1"),
                to: sq("B2")
            })
        );
        assert_eq!(
            execute_move_str(&mut b, "E4", "E5"),
            Err(ChessError::NoPieceAtSource(sq("E4")))
        );
        assert_eq!(
            execute_move_str(&mut b, "I2", "A3"),
            Err(ChessError::InvalidSquare("I2".to_string()))
        );
        assert_eq!(
            execute_move_str(&mut b, "A2", "A9"),
            Err(ChessError::InvalidSquare("A9".to_string()))
        );
        assert_eq!(b, before);
    }

    #[test]
    fn test_lowercase_input() {
        let mut b = Board::standard_setup();
        execute_move_str(&mut b, "d2", "d4").unwrap();
        assert_eq!(b.en_passant(), Some(sq("D3")));
        assert_eq!(b.history()[0], "Moved white pawn from D2 to D4.");
    }

    #[test]
    fn test_moved_pawn_cannot_double_step() {
        let mut b = Board::standard_setup();
        execute_move_str(&mut b, "C2", "C3").unwrap();
        execute_move_str(&mut b, "H7", "H6").unwrap();
        assert!(matches!(
            execute_move_str(&mut b, "C3", "C5"),
            Err(ChessError::IllegalMove { .. })
        ));
    }

    /// Plays random legal games and checks the bookkeeping after every ply.
    #[test]
    fn test_random_games() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..20 {
            let mut b = Board::standard_setup();
            for ply in 0..80 {
                let moves = legal_moves(&b);
                let (from, to) = match moves.choose(&mut rng) {
                    Some(m) => *m,
                    None => break,
                };
                let mover = b.turn();
                let pieces_before = Square::all().filter(|s| b.get(*s).is_some()).count();

                let mv = execute_move(&mut b, from, to).unwrap();

                assert_eq!(b.turn(), mover.opposite());
                assert_eq!(b.history().len(), ply + 1);
                assert_eq!(b.get(from), None);
                assert!(b.get(to).unwrap().has_moved);

                let pieces_after = Square::all().filter(|s| b.get(*s).is_some()).count();
                let expected = pieces_before - mv.captured().map_or(0, |_| 1);
                assert_eq!(pieces_after, expected);

                if let Some(ep) = b.en_passant() {
                    assert_eq!(b.get(ep), None);
                    let pawn_sq = (ep + (0, mover.forward())).unwrap();
                    assert_eq!(pawn_sq, to);
                    assert_eq!(b.get(pawn_sq).unwrap().kind, PieceKind::Pawn);
                }

                for (sq, _) in b.squares_with(b.turn()) {
                    for dest in legal_destinations(&b, sq) {
                        let target = b.get(dest);
                        assert!(target.map_or(true, |p| p.color != b.turn()));
                    }
                }
            }
        }
    }
}
