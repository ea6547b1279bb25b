//! Shared board handle for multi-threaded embedders.
//!
//! The rules core has no internal locking. `SharedBoard` wraps a board in a
//! mutex so that a turn and the status evaluation that follows it happen
//! under one lock acquisition.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Board, Cell, Color, Square, StatusReport, TurnError};

/// A cloneable, thread-safe handle to one board.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Apply a turn and evaluate the resulting position atomically.
    ///
    /// On error the board is unchanged and no status is computed.
    pub fn play(
        &self,
        color: Color,
        from: Square,
        to: Square,
    ) -> Result<(Cell, StatusReport), TurnError> {
        let mut board = self.0.lock();
        let captured = board.apply_turn(color, from, to)?;
        Ok((captured, board.status()))
    }

    /// Evaluate the current position.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        self.0.lock().status()
    }

    /// Copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().clone()
    }

    /// Run `f` with exclusive access to the board.
    pub fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
