//! Computer move selection.
//!
//! A [`MoveSelector`] is asked for a move whenever a computer-controlled
//! seat is on turn. Selectors never modify the board they are shown.

mod minimax;
mod random;

pub use minimax::{DRAW, LOSS, Minimax, WIN};
pub use random::RandomSelector;

use super::{Board, Move};

/// Chooses a move for the side on turn.
pub trait MoveSelector {
    /// Returns the chosen move, or `None` when the board has no empty cell.
    fn select_move(&mut self, board: &Board) -> Option<Move>;
}
