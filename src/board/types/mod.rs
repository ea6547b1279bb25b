//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate

mod piece;
mod square;

pub use piece::{Color, Piece};
pub use square::{Square, BOARD_SIZE};
