//! Error types for board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// Error type for coordinates that fall outside the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: isize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: isize },
    /// Input is not a file letter followed by a rank digit
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement must list exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// A rank does not describe exactly 8 files
    WrongFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// A turn that breaks a movement rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesViolation {
    /// No piece on the source square
    EmptySource { from: Square },
    /// The piece on the source square belongs to the other player
    WrongColor {
        from: Square,
        expected: Color,
        found: Color,
    },
    /// The piece cannot move to the (empty) destination
    IllegalMove { piece: Piece, from: Square, to: Square },
    /// The piece cannot capture on the (occupied) destination
    IllegalAttack { piece: Piece, from: Square, to: Square },
    /// The destination holds a piece of the mover's own color
    SameColorCapture { to: Square, color: Color },
}

impl fmt::Display for RulesViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesViolation::EmptySource { from } => {
                write!(f, "No piece on {from}")
            }
            RulesViolation::WrongColor {
                from,
                expected,
                found,
            } => {
                write!(f, "Piece on {from} is {found}, but {expected} is moving")
            }
            RulesViolation::IllegalMove { piece, from, to } => {
                write!(f, "{piece} cannot move from {from} to {to}")
            }
            RulesViolation::IllegalAttack { piece, from, to } => {
                write!(f, "{piece} cannot attack {to} from {from}")
            }
            RulesViolation::SameColorCapture { to, color } => {
                write!(f, "Cannot capture own {color} piece on {to}")
            }
        }
    }
}

impl std::error::Error for RulesViolation {}

/// Error type for `Board::apply_turn`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// A coordinate is off the board
    OutOfRange(SquareError),
    /// The turn is well-formed but not allowed
    Rules(RulesViolation),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::OutOfRange(err) => write!(f, "Out of range: {err}"),
            TurnError::Rules(err) => write!(f, "Rules violation: {err}"),
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::OutOfRange(err) => Some(err),
            TurnError::Rules(err) => Some(err),
        }
    }
}

impl From<SquareError> for TurnError {
    fn from(err: SquareError) -> Self {
        TurnError::OutOfRange(err)
    }
}

impl From<RulesViolation> for TurnError {
    fn from(err: RulesViolation) -> Self {
        TurnError::Rules(err)
    }
}
