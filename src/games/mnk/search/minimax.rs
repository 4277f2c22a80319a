//! Exhaustive minimax search.
//!
//! Scores are exactly [`WIN`], [`DRAW`] or [`LOSS`] and are not discounted
//! by depth: among several forced wins the engine keeps whichever it meets
//! first, not the fastest. There is no pruning, so every legal continuation
//! is visited. That is cheap on 3x3 and grows factorially with the number
//! of empty cells.

use super::super::{Board, Cell, Move, Occupant};
use super::MoveSelector;
use tracing::{debug, instrument, trace};

/// Score of a position won by the maximizing occupant.
pub const WIN: i32 = 1;
/// Score of a position with no winner.
pub const DRAW: i32 = 0;
/// Score of a position won by the minimizing occupant.
pub const LOSS: i32 = -1;

/// Perfect-play move selector for one occupant against another.
#[derive(Debug, Clone)]
pub struct Minimax {
    maximizing: Occupant,
    minimizing: Occupant,
    nodes_visited: u64,
}

impl Minimax {
    /// Creates a searcher that plays `maximizing` against `minimizing`.
    #[instrument]
    pub fn new(maximizing: Occupant, minimizing: Occupant) -> Self {
        Self {
            maximizing,
            minimizing,
            nodes_visited: 0,
        }
    }

    /// The occupant this searcher plays for.
    pub fn maximizing(&self) -> Occupant {
        self.maximizing
    }

    /// The opposing occupant.
    pub fn minimizing(&self) -> Occupant {
        self.minimizing
    }

    /// Positions visited by the most recent [`Minimax::choose_best_move`].
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Scores the board as it stands.
    ///
    /// Non-terminal positions also score [`DRAW`]; only trust the value
    /// once the position is actually terminal.
    pub fn evaluate(&self, board: &Board) -> i32 {
        match board.winner() {
            Some(o) if o == self.maximizing => WIN,
            Some(o) if o == self.minimizing => LOSS,
            _ => DRAW,
        }
    }

    /// Returns the minimax value of `board` with the given side on turn.
    ///
    /// A decided position returns at once, even with empty cells left.
    /// Children are tried in [`Board::available_moves`] order and every
    /// placement is undone, so `board` is unchanged on return.
    pub fn search(&mut self, board: &mut Board, maximizing_turn: bool) -> i32 {
        self.nodes_visited += 1;

        let score = self.evaluate(board);
        if score != DRAW {
            return score;
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            return DRAW;
        }

        let (occupant, mut best) = if maximizing_turn {
            (self.maximizing, i32::MIN)
        } else {
            (self.minimizing, i32::MAX)
        };

        for at in moves {
            board.set(at, Cell::Occupied(occupant));
            let child = self.search(board, !maximizing_turn);
            board.set(at, Cell::Empty);

            best = if maximizing_turn {
                best.max(child)
            } else {
                best.min(child)
            };
        }

        best
    }

    /// Picks the best move for the maximizing occupant.
    ///
    /// The search runs on a private copy of `board`. A candidate replaces
    /// the current pick only if its score is strictly higher, so ties go to
    /// the earliest move in enumeration order. Returns `None` if the board
    /// is full.
    ///
    /// Scores are not discounted by depth, so when several moves force a win
    /// the earliest one is returned, not necessarily the fastest. With Cross
    /// on (0,0) and (1,1) and Circle on (0,1), every empty cell wins for
    /// Cross and the pick is (0,2).
    #[instrument(
        skip(self, board),
        fields(maximizing = %self.maximizing, minimizing = %self.minimizing)
    )]
    pub fn choose_best_move(&mut self, board: &Board) -> Option<Move> {
        self.nodes_visited = 0;
        let mut scratch = board.clone();
        let mut best: Option<(Move, i32)> = None;

        for at in scratch.available_moves() {
            scratch.set(at, Cell::Occupied(self.maximizing));
            let score = self.search(&mut scratch, false);
            scratch.set(at, Cell::Empty);
            trace!(%at, score, "Scored candidate");

            if best.is_none_or(|(_, top)| score > top) {
                best = Some((at, score));
            }
        }

        debug!(nodes = self.nodes_visited, ?best, "Search finished");
        best.map(|(at, _)| at)
    }
}

impl MoveSelector for Minimax {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        self.choose_best_move(board)
    }
}
