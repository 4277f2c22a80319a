//! Board storage and move validation.

use super::action::PlayError;
use super::rules;
use super::types::{Cell, Move, Occupant};
use serde::Serialize;
use tracing::{debug, instrument};

/// Smallest accepted width or height.
pub const MIN_SIDE: usize = 3;

/// Smallest accepted number of aligned cells needed to win.
pub const MIN_WIN_LENGTH: usize = 3;

/// A `width` x `height` grid where `win_length` aligned cells win.
///
/// Cells are stored column by column, so iterating the storage visits
/// coordinates with `x` outer and `y` inner. That order is shared by
/// [`Board::available_moves`], the win scan and the search engine, and it
/// decides every tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    width: usize,
    height: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// Out-of-range arguments are corrected rather than rejected: each side
    /// is raised to at least [`MIN_SIDE`], and `win_length` is clamped into
    /// `[MIN_WIN_LENGTH, min(width, height)]`.
    #[instrument]
    pub fn new(width: usize, height: usize, win_length: usize) -> Self {
        let w = width.max(MIN_SIDE);
        let h = height.max(MIN_SIDE);
        let k = win_length.clamp(MIN_WIN_LENGTH, w.min(h));

        if (w, h, k) != (width, height, win_length) {
            debug!(
                width = w,
                height = h,
                win_length = k,
                "Normalized board dimensions"
            );
        }

        Self {
            width: w,
            height: h,
            win_length: k,
            cells: vec![Cell::Empty; w * h],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Aligned cells required to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns the cell at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Checks if `(x, y)` is on the board and empty.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Places `occupant` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// - [`PlayError::OutOfBounds`] if the coordinate is off the board.
    /// - [`PlayError::CellOccupied`] if the cell is already taken.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, occupant: Occupant, x: usize, y: usize) -> Result<(), PlayError> {
        let i = self.index(x, y).ok_or(PlayError::OutOfBounds { x, y })?;
        if !self.cells[i].is_empty() {
            debug!("Rejected move on occupied cell");
            return Err(PlayError::CellOccupied { x, y });
        }
        self.cells[i] = Cell::Occupied(occupant);
        Ok(())
    }

    /// Returns the first winner found by the win scan, if any.
    pub fn winner(&self) -> Option<Occupant> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    ///
    /// A full board may also hold a winning line; callers check
    /// [`Board::winner`] first.
    pub fn is_draw(&self) -> bool {
        rules::is_full(self)
    }

    /// Empties every cell. Dimensions and win length are kept.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All empty coordinates, `x` outer and `y` inner.
    pub fn available_moves(&self) -> Vec<Move> {
        self.coords()
            .filter(|m| self.is_empty(m.x, m.y))
            .collect()
    }

    /// Every coordinate of the board in enumeration order.
    pub fn coords(&self) -> impl Iterator<Item = Move> + use<> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Move::new(x, y)))
    }

    /// Writes a cell without validation. Used by search and tests.
    pub(crate) fn set(&mut self, at: Move, cell: Cell) {
        debug_assert!(at.x < self.width && at.y < self.height);
        let i = at.x * self.height + at.y;
        self.cells[i] = cell;
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                match self.cells[x * self.height + y] {
                    Cell::Empty => f.write_str(".")?,
                    Cell::Occupied(occupant) => write!(f, "{occupant}")?,
                }
            }
            if y + 1 < self.height {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
