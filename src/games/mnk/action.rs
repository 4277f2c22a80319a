//! Move rejection reasons.
//!
//! `Board::play` is the only fallible board operation. Both errors leave
//! the board untouched, so the caller can simply ask again.

use derive_more::{Display, Error};

/// Error returned when a move cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// The coordinate lies outside the board.
    #[display("Cell ({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// The target cell already holds an occupant.
    #[display("Cell ({x}, {y}) is already occupied")]
    CellOccupied {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },
}
