//! Check and checkmate derivation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Piece, Square};

/// What kind of outcome a [`StatusReport`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatusKind {
    /// Neither king is in check.
    None,
    /// A king is attacked but has an escape square.
    Check,
    /// A king is attacked and has no escape square.
    Checkmate,
    /// A king is not on the board.
    MissingKing,
}

/// Outcome of evaluating a board.
///
/// For `Check` and `Checkmate`, `color` is the king under attack. For
/// `MissingKing`, `color` is the side that still has its king, i.e. the
/// winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusReport {
    kind: StatusKind,
    color: Option<Color>,
    victory: bool,
}

impl StatusReport {
    pub const NONE: StatusReport = StatusReport {
        kind: StatusKind::None,
        color: None,
        victory: false,
    };

    #[must_use]
    pub const fn check(color: Color) -> Self {
        StatusReport {
            kind: StatusKind::Check,
            color: Some(color),
            victory: false,
        }
    }

    #[must_use]
    pub const fn checkmate(color: Color) -> Self {
        StatusReport {
            kind: StatusKind::Checkmate,
            color: Some(color),
            victory: true,
        }
    }

    #[must_use]
    pub const fn missing_king(winner: Color) -> Self {
        StatusReport {
            kind: StatusKind::MissingKing,
            color: Some(winner),
            victory: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// True when the game is decided.
    #[inline]
    #[must_use]
    pub const fn victory(&self) -> bool {
        self.victory
    }

    /// The side that has won, if the game is decided.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.kind {
            StatusKind::Checkmate => self.color.map(Color::opponent),
            StatusKind::MissingKing => self.color,
            StatusKind::None | StatusKind::Check => None,
        }
    }

    /// Human-readable explanation of the status.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match (self.kind, self.color) {
            (StatusKind::Check, Some(Color::White)) => "White king is in check",
            (StatusKind::Check, Some(Color::Black)) => "Black king is in check",
            (StatusKind::Checkmate, Some(Color::White)) => "White king is checkmated",
            (StatusKind::Checkmate, Some(Color::Black)) => "Black king is checkmated",
            (StatusKind::MissingKing, Some(Color::White)) => "Black king is missing",
            (StatusKind::MissingKing, Some(Color::Black)) => "White king is missing",
            _ => "No king is in check",
        }
    }
}

impl Default for StatusReport {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())?;
        if let Some(winner) = self.winner() {
            write!(f, " ({winner} wins)")?;
        }
        Ok(())
    }
}

impl Board {
    /// Derive the current check/checkmate status.
    ///
    /// White's result takes precedence over Black's when both kings are
    /// attacked.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        let (white_king, black_king) = self.locate_kings();

        let Some(white_king) = white_king else {
            log_debug!("white king missing");
            return StatusReport::missing_king(Color::Black);
        };
        let Some(black_king) = black_king else {
            log_debug!("black king missing");
            return StatusReport::missing_king(Color::White);
        };

        let white = self.king_status(white_king, Color::White);
        let black = self.king_status(black_king, Color::Black);
        let report = white.or(black).unwrap_or(StatusReport::NONE);
        log_trace!("status: {report:?}");
        report
    }

    /// Both kings in one pass; later duplicates overwrite earlier ones.
    fn locate_kings(&self) -> (Option<Square>, Option<Square>) {
        let mut kings = [None; 2];
        for (sq, color, piece) in self.pieces() {
            if piece == Piece::King {
                kings[color.index()] = Some(sq);
            }
        }
        (kings[0], kings[1])
    }

    /// Check or checkmate for the king of `color` on `king`, or `None` if it
    /// is not attacked.
    fn king_status(&self, king: Square, color: Color) -> Option<StatusReport> {
        if !self.is_square_attacked(king, color) {
            return None;
        }

        // The king stays on its square while neighbours are probed.
        let escape = (-1..=1)
            .flat_map(|d_rank| (-1..=1).map(move |d_file| (d_rank, d_file)))
            .filter_map(|(d_rank, d_file)| king.offset(d_rank, d_file))
            .find(|&candidate| {
                self.color_on(candidate) != Some(color)
                    && !self.is_square_attacked(candidate, color)
            });

        match escape {
            Some(sq) => {
                log_trace!("{color} king in check, escape via {sq}");
                Some(StatusReport::check(color))
            }
            None => Some(StatusReport::checkmate(color)),
        }
    }
}

/// Free-function form of [`Board::status`].
#[must_use]
pub fn evaluate(board: &Board) -> StatusReport {
    board.status()
}
