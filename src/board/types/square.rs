//! Square type and algebraic coordinate conversion.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Board width and height.
pub const BOARD_SIZE: usize = 8;

/// A square on the chess board, represented as (rank, file).
///
/// The tuple constructor is unchecked; every board operation that accepts a
/// `Square` validates it. Use [`Square::new`], `TryFrom` or `FromStr` for a
/// checked square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// Return the square itself if it lies on the board.
    pub fn validate(self) -> Result<Self, SquareError> {
        Square::try_from((self.0, self.1))
    }

    /// Step by a signed (rank, file) offset; `None` when the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Square> {
        let rank = self.0.checked_add_signed(d_rank)?;
        let file = self.1.checked_add_signed(d_file)?;
        Square::new(rank, file)
    }

    /// Signed (rank, file) distance from `self` to `other`.
    #[inline]
    #[must_use]
    pub const fn delta(self, other: Square) -> (isize, isize) {
        (
            other.0 as isize - self.0 as isize,
            other.1 as isize - self.1 as isize,
        )
    }

    /// Rotate the square by 180 degrees (e.g., a1 <-> h8)
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Square(7 - self.0, 7 - self.1)
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Iterate over all 64 squares in scan order (a1, b1, ..., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= BOARD_SIZE {
            return Err(SquareError::RankOutOfBounds {
                rank: rank as isize,
            });
        }
        if file >= BOARD_SIZE {
            return Err(SquareError::FileOutOfBounds {
                file: file as isize,
            });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation: a file letter followed by a rank digit ("e4").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };
        if !file_char.is_ascii_alphabetic() || !rank_char.is_ascii_digit() {
            return Err(invalid());
        }

        let file = file_char.to_ascii_lowercase() as isize - 'a' as isize;
        let rank = rank_char as isize - '1' as isize;

        if !(0..BOARD_SIZE as isize).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if !(0..BOARD_SIZE as isize).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }

        Ok(Square(rank as usize, file as usize))
    }
}
