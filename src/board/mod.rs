//! Chess board representation and rules.
//!
//! A mailbox board of `Option<(Color, Piece)>` cells, per-piece movement
//! geometry, square attack detection and check/checkmate derivation.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, StatusKind};
//!
//! let mut board = Board::new();
//! board.apply_turn(Color::White, "e2".parse()?, "e4".parse()?)?;
//! assert_eq!(board.status().kind(), StatusKind::None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod movement;
pub mod prelude;
mod state;
mod status;
mod turn;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::is_attacked;
pub use builder::BoardBuilder;
pub use error::{FenError, RulesViolation, SquareError, TurnError};
pub use state::{Board, Cell};
pub use status::{evaluate, StatusKind, StatusReport};
pub use types::{Color, Piece, Square, BOARD_SIZE};
