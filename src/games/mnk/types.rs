//! Core domain types for m,n,k-games.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Token identifying who holds a cell.
///
/// Occupants carry no behavior beyond equality. Up to four players can
/// share a board, one per symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Occupant {
    /// Cross, drawn as `X`.
    #[strum(to_string = "X", serialize = "cross")]
    Cross,
    /// Circle, drawn as `O`.
    #[strum(to_string = "O", serialize = "circle")]
    Circle,
    /// Triangle, drawn as `T`.
    #[strum(to_string = "T", serialize = "triangle")]
    Triangle,
    /// Square, drawn as `S`.
    #[strum(to_string = "S", serialize = "square")]
    Square,
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody holds this cell.
    #[default]
    Empty,
    /// Cell held by an occupant.
    Occupied(Occupant),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Occupant> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(occupant) => Some(occupant),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate: column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Column, `0..width`.
    pub x: usize,
    /// Row, `0..height`.
    pub y: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
