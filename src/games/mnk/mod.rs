//! Generalized tic-tac-toe: `width` x `height` boards won by `win_length`
//! aligned cells.
//!
//! [`Board`] owns the grid and the rules; [`Minimax`] picks perfect moves
//! for a computer player.

mod action;
mod board;
mod rules;
mod search;
mod types;

pub use action::PlayError;
pub use board::{Board, MIN_SIDE, MIN_WIN_LENGTH};
pub use search::{DRAW, LOSS, Minimax, MoveSelector, RandomSelector, WIN};
pub use types::{Cell, Move, Occupant};
