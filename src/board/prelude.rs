//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    evaluate, is_attacked, Board, BoardBuilder, Color, FenError, Piece, RulesViolation, Square,
    SquareError, StatusKind, StatusReport, TurnError,
};
