//! Square attack detection by ray casting and knight probes.

use super::{Board, Color, Square};

/// Rank/file steps for the four straight and four diagonal rays.
pub(crate) const RAY_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    /// Whether any piece of `defender`'s opponent attacks `target`.
    ///
    /// Each ray stops at the first occupied square; only that piece can attack
    /// along it. Knight squares are checked separately and never blocked. The
    /// occupancy of `target` itself is ignored. Off-board targets are never
    /// attacked.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, defender: Color) -> bool {
        if !target.is_on_board() {
            return false;
        }
        let attacker = defender.opponent();

        RAY_DIRECTIONS
            .iter()
            .any(|&(d_rank, d_file)| self.ray_attacks(target, d_rank, d_file, attacker))
            || self.knight_attacks(target, attacker)
    }

    /// Walk outward from `target` and test the first piece met.
    fn ray_attacks(&self, target: Square, d_rank: isize, d_file: isize, attacker: Color) -> bool {
        let mut current = target;
        while let Some(next) = current.offset(d_rank, d_file) {
            if let Some((color, piece)) = self.cell(next) {
                return color == attacker && piece.can_attack(color, next, target);
            }
            current = next;
        }
        false
    }

    fn knight_attacks(&self, target: Square, attacker: Color) -> bool {
        KNIGHT_OFFSETS.iter().any(|&(d_rank, d_file)| {
            target
                .offset(d_rank, d_file)
                .and_then(|from| self.cell(from).map(|cell| (from, cell)))
                .is_some_and(|(from, (color, piece))| {
                    color == attacker && piece.can_attack(color, from, target)
                })
        })
    }
}

/// Free-function form of [`Board::is_square_attacked`].
#[must_use]
pub fn is_attacked(board: &Board, target: Square, defender: Color) -> bool {
    board.is_square_attacked(target, defender)
}
