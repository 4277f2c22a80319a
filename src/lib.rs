//! Strictly MNK - generalized tic-tac-toe with a perfect-play opponent
//!
//! An m,n,k-game is played on a `width` x `height` grid; the first player to
//! align `win_length` of their symbols horizontally, vertically or
//! diagonally wins.
//!
//! # Architecture
//!
//! - **Board**: grid storage, move validation, win and draw detection
//! - **Minimax**: exhaustive, unpruned search choosing the computer's move
//! - **Match**: headless round loop with turn rotation and scoring
//! - **Config**: TOML match configuration
//!
//! # Example
//!
//! ```
//! use strictly_mnk::{Board, Minimax, Occupant};
//!
//! let mut board = Board::new(3, 3, 3);
//! board.play(Occupant::Circle, 1, 1).unwrap();
//!
//! let mut engine = Minimax::new(Occupant::Cross, Occupant::Circle);
//! if let Some(at) = engine.choose_best_move(&board) {
//!     board.play(Occupant::Cross, at.x, at.y).unwrap();
//! }
//! assert_eq!(board.winner(), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Board and rules
pub use games::mnk::{Board, Cell, MIN_SIDE, MIN_WIN_LENGTH, Move, Occupant, PlayError};

// Crate-level exports - Move selection
pub use games::mnk::{DRAW, LOSS, Minimax, MoveSelector, RandomSelector, WIN};

// Crate-level exports - Configuration
pub use config::{ConfigError, MAX_PLAYERS, MIN_PLAYERS, MatchConfig};

// Crate-level exports - Match orchestration
pub use session::{Match, MatchError, PlayerKind, RoundStatus, Scoreboard, Seat};
