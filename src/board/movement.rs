//! Per-piece movement and attack geometry.
//!
//! These predicates look only at the two coordinates and the owner's color.
//! Blocking pieces and occupancy are handled by the board and the attack scan.
//! Coordinates are not required to be on the board.

use super::{Color, Piece, Square};

impl Piece {
    /// Whether this piece may step from `from` to an empty `to`.
    #[must_use]
    pub fn can_move(self, color: Color, from: Square, to: Square) -> bool {
        let (d_rank, d_file) = from.delta(to);
        if d_rank == 0 && d_file == 0 {
            return false;
        }
        match self {
            Piece::King => d_rank.abs() <= 1 && d_file.abs() <= 1,
            Piece::Queen => d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs(),
            Piece::Rook => d_rank == 0 || d_file == 0,
            Piece::Bishop => d_rank.abs() == d_file.abs(),
            Piece::Knight => knight_jump(d_rank, d_file),
            Piece::Pawn => {
                let dir = color.pawn_direction();
                d_file == 0
                    && (d_rank == dir
                        || (from.rank() == color.pawn_start_rank() && d_rank == 2 * dir))
            }
        }
    }

    /// Whether this piece attacks `to` from `from`, ignoring anything in between.
    #[must_use]
    pub fn can_attack(self, color: Color, from: Square, to: Square) -> bool {
        match self {
            Piece::Pawn => {
                let (d_rank, d_file) = from.delta(to);
                d_rank == color.pawn_direction() && d_file.abs() == 1
            }
            _ => self.can_move(color, from, to),
        }
    }
}

#[inline]
fn knight_jump(d_rank: isize, d_file: isize) -> bool {
    matches!(
        (d_rank.abs(), d_file.abs()),
        (2, 1) | (1, 2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_piece_moves_onto_itself() {
        for piece in Piece::ALL {
            for color in Color::BOTH {
                for from in Square::all() {
                    assert!(!piece.can_move(color, from, from), "{piece} {from}");
                    assert!(!piece.can_attack(color, from, from), "{piece} {from}");
                }
            }
        }
    }

    #[test]
    fn test_king_steps_one_square() {
        let king = Piece::King;
        assert!(king.can_move(Color::White, sq("e4"), sq("e5")));
        assert!(king.can_move(Color::White, sq("e4"), sq("d3")));
        assert!(!king.can_move(Color::White, sq("e4"), sq("e6")));
        assert!(!king.can_move(Color::White, sq("e4"), sq("g5")));
    }

    #[test]
    fn test_sliders() {
        assert!(Piece::Rook.can_move(Color::Black, sq("a1"), sq("a8")));
        assert!(Piece::Rook.can_move(Color::Black, sq("a1"), sq("h1")));
        assert!(!Piece::Rook.can_move(Color::Black, sq("a1"), sq("b2")));

        assert!(Piece::Bishop.can_move(Color::White, sq("c1"), sq("h6")));
        assert!(!Piece::Bishop.can_move(Color::White, sq("c1"), sq("c2")));

        assert!(Piece::Queen.can_attack(Color::White, sq("d1"), sq("h5")));
        assert!(Piece::Queen.can_attack(Color::White, sq("d1"), sq("d8")));
        assert!(!Piece::Queen.can_attack(Color::White, sq("d1"), sq("e3")));
    }

    #[test]
    fn test_knight_jumps() {
        let from = sq("d4");
        let targets = ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"];
        for to in Square::all() {
            let expected = targets.contains(&to.to_string().as_str());
            assert_eq!(Piece::Knight.can_move(Color::White, from, to), expected, "{to}");
            assert_eq!(Piece::Knight.can_attack(Color::Black, from, to), expected, "{to}");
        }
    }

    #[test]
    fn test_white_pawn_pushes() {
        let pawn = Piece::Pawn;
        assert!(pawn.can_move(Color::White, sq("e2"), sq("e3")));
        assert!(pawn.can_move(Color::White, sq("e2"), sq("e4")));
        assert!(!pawn.can_move(Color::White, sq("e3"), sq("e5")));
        assert!(!pawn.can_move(Color::White, sq("e2"), sq("e1")));
        assert!(!pawn.can_move(Color::White, sq("e2"), sq("d3")));
    }

    #[test]
    fn test_black_pawn_pushes() {
        let pawn = Piece::Pawn;
        assert!(pawn.can_move(Color::Black, sq("d7"), sq("d6")));
        assert!(pawn.can_move(Color::Black, sq("d7"), sq("d5")));
        assert!(!pawn.can_move(Color::Black, sq("d6"), sq("d4")));
        assert!(!pawn.can_move(Color::Black, sq("d7"), sq("d8")));
    }

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        let pawn = Piece::Pawn;
        assert!(pawn.can_attack(Color::White, sq("e4"), sq("d5")));
        assert!(pawn.can_attack(Color::White, sq("e4"), sq("f5")));
        assert!(!pawn.can_attack(Color::White, sq("e4"), sq("e5")));
        assert!(!pawn.can_attack(Color::White, sq("e4"), sq("d3")));
        assert!(!pawn.can_attack(Color::White, sq("e2"), sq("f4")));

        assert!(pawn.can_attack(Color::Black, sq("e5"), sq("d4")));
        assert!(!pawn.can_attack(Color::Black, sq("e5"), sq("d6")));
    }

    #[test]
    fn test_predicates_accept_off_board_coordinates() {
        assert!(Piece::Rook.can_move(Color::White, Square(0, 0), Square(12, 0)));
        assert!(!Piece::Knight.can_move(Color::White, Square(0, 0), Square(9, 9)));
    }
}
