#[macro_use]
mod logging;

pub mod board;
pub mod sync;

pub use board::{evaluate, is_attacked, Board, Color, Piece, Square, StatusKind, StatusReport};
pub use sync::SharedBoard;
