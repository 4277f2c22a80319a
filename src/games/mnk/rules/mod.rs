//! Game rules for m,n,k-games.
//!
//! Pure functions that evaluate a board. Storage lives in `Board`; these
//! only read it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
