use super::error::{RulesViolation, TurnError};
use super::state::Cell;
use super::{Board, Color, Square};

impl Board {
    /// Move `color`'s piece from `from` to `to`.
    ///
    /// Checks run in order: both squares on the board, a piece on `from`, that
    /// piece owned by `color`, then the piece's move rule (empty destination)
    /// or capture rule (occupied destination). On error the board is left
    /// untouched. On success the captured piece, if any, is returned.
    ///
    /// Whether the mover's own king ends up attacked is not considered.
    pub fn apply_turn(&mut self, color: Color, from: Square, to: Square) -> Result<Cell, TurnError> {
        if let Err(err) = self.check_turn(color, from, to) {
            log_debug!("rejected {color} turn {from}->{to}: {err}");
            return Err(err);
        }

        let captured = self.take_piece(to);
        if let Some((owner, piece)) = self.take_piece(from) {
            self.set_piece(to, owner, piece);
        }

        log_debug!("{color} turn {from}->{to}, captured {captured:?}");
        Ok(captured)
    }

    /// Run every `apply_turn` check without touching the board.
    pub fn check_turn(&self, color: Color, from: Square, to: Square) -> Result<(), TurnError> {
        let from = from.validate()?;
        let to = to.validate()?;

        let Some((owner, piece)) = self.cell(from) else {
            return Err(RulesViolation::EmptySource { from }.into());
        };
        if owner != color {
            return Err(RulesViolation::WrongColor {
                from,
                expected: color,
                found: owner,
            }
            .into());
        }

        match self.cell(to) {
            None => {
                if !piece.can_move(color, from, to) {
                    return Err(RulesViolation::IllegalMove { piece, from, to }.into());
                }
            }
            Some((target_color, _)) => {
                if target_color == color {
                    return Err(RulesViolation::SameColorCapture { to, color }.into());
                }
                if !piece.can_attack(color, from, to) {
                    return Err(RulesViolation::IllegalAttack { piece, from, to }.into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::SquareError;
    use crate::board::{BoardBuilder, Piece};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_double_push_from_start() {
        let mut board = Board::new();
        assert_eq!(board.apply_turn(Color::White, sq("e2"), sq("e4")), Ok(None));
        assert_eq!(board.piece_at(sq("e2")), Ok(None));
        assert_eq!(
            board.piece_at(sq("e4")),
            Ok(Some((Color::White, Piece::Pawn)))
        );
    }

    #[test]
    fn test_capture_returns_victim() {
        let mut board = BoardBuilder::new()
            .piece(sq("d4"), Color::White, Piece::Pawn)
            .piece(sq("e5"), Color::Black, Piece::Knight)
            .build();
        let captured = board.apply_turn(Color::White, sq("d4"), sq("e5"));
        assert_eq!(captured, Ok(Some((Color::Black, Piece::Knight))));
        assert_eq!(board.piece_count(), 1);
        assert_eq!(board.color_on(sq("e5")), Some(Color::White));
    }

    #[test]
    fn test_rejections_in_order() {
        let mut board = Board::new();

        assert_eq!(
            board.apply_turn(Color::White, Square(8, 0), sq("e4")),
            Err(TurnError::OutOfRange(SquareError::RankOutOfBounds { rank: 8 }))
        );
        assert_eq!(
            board.apply_turn(Color::White, sq("e4"), sq("e5")),
            Err(RulesViolation::EmptySource { from: sq("e4") }.into())
        );
        assert_eq!(
            board.apply_turn(Color::White, sq("e7"), sq("e5")),
            Err(RulesViolation::WrongColor {
                from: sq("e7"),
                expected: Color::White,
                found: Color::Black,
            }
            .into())
        );
        assert_eq!(
            board.apply_turn(Color::White, sq("e2"), sq("e5")),
            Err(RulesViolation::IllegalMove {
                piece: Piece::Pawn,
                from: sq("e2"),
                to: sq("e5"),
            }
            .into())
        );
        assert_eq!(
            board.apply_turn(Color::White, sq("a1"), sq("a2")),
            Err(RulesViolation::SameColorCapture {
                to: sq("a2"),
                color: Color::White,
            }
            .into())
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_pawn_cannot_capture_straight_ahead() {
        let mut board = BoardBuilder::new()
            .piece(sq("e4"), Color::White, Piece::Pawn)
            .piece(sq("e5"), Color::Black, Piece::Pawn)
            .build();
        let before = board.clone();
        assert_eq!(
            board.apply_turn(Color::White, sq("e4"), sq("e5")),
            Err(RulesViolation::IllegalAttack {
                piece: Piece::Pawn,
                from: sq("e4"),
                to: sq("e5"),
            }
            .into())
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_pawn_cannot_move_diagonally_to_empty_square() {
        let mut board = Board::new();
        assert!(matches!(
            board.apply_turn(Color::White, sq("e2"), sq("d3")),
            Err(TurnError::Rules(RulesViolation::IllegalMove { .. }))
        ));
    }

    #[test]
    fn test_sliders_ignore_blockers() {
        // Path blocking is not part of turn validation.
        let mut board = Board::new();
        assert_eq!(
            board.apply_turn(Color::White, sq("a1"), sq("a7")),
            Ok(Some((Color::Black, Piece::Pawn)))
        );
    }

    #[test]
    fn test_check_turn_is_pure() {
        let board = Board::new();
        assert!(board.check_turn(Color::Black, sq("g8"), sq("f6")).is_ok());
        assert_eq!(board, Board::new());
    }
}
