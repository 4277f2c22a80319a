//! Headless match orchestration.
//!
//! A [`Match`] walks the round cycle Setup -> Playing -> (Win | Draw) ->
//! Setup on one board: it rotates turns through the seats, asks computer
//! seats for their moves, checks win before draw after every move and
//! keeps the score across rounds.

use crate::config::{ConfigError, MatchConfig};
use crate::games::mnk::{Board, Minimax, MoveSelector, Occupant, PlayError, RandomSelector};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves are submitted by a person.
    Human,
    /// Computer player picking any empty cell.
    Random,
    /// Computer player with perfect play.
    Minimax,
}

/// A player slot in a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Seat {
    /// Display name.
    name: String,
    /// Symbol placed by this seat.
    occupant: Occupant,
    /// Controller of this seat.
    kind: PlayerKind,
}

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundStatus {
    /// Moves are still being accepted.
    InProgress,
    /// An occupant completed a line.
    Won(Occupant),
    /// The board filled up with no line.
    Draw,
}

/// Error returned by match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MatchError {
    /// The board rejected the move.
    #[display("Invalid move: {_0}")]
    #[from]
    Play(PlayError),

    /// The round has finished; call [`Match::next_round`].
    #[display("Round is over")]
    RoundOver,

    /// The seat on turn is human.
    #[display("Seat on turn is not computer-controlled")]
    NotComputerTurn,
}

#[derive(Debug, Clone)]
enum Controller {
    Human,
    Random(RandomSelector),
    Minimax(Minimax),
}

impl Controller {
    fn selector(&mut self) -> Option<&mut dyn MoveSelector> {
        match self {
            Controller::Human => None,
            Controller::Random(selector) => Some(selector as &mut dyn MoveSelector),
            Controller::Minimax(selector) => Some(selector as &mut dyn MoveSelector),
        }
    }
}

/// Wins per occupant and drawn rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Wins keyed by occupant.
    wins: HashMap<Occupant, u32>,
    /// Rounds that ended full with no line.
    draws: u32,
}

impl Scoreboard {
    /// Wins recorded for `occupant`.
    pub fn wins_for(&self, occupant: Occupant) -> u32 {
        self.wins.get(&occupant).copied().unwrap_or(0)
    }
}

/// A sequence of rounds between fixed seats on one board.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    seats: Vec<Seat>,
    controllers: Vec<Controller>,
    opener: usize,
    turn: usize,
    round: u32,
    status: RoundStatus,
    scores: Scoreboard,
}

impl Match {
    /// Starts the first round.
    ///
    /// A minimax seat plays for its own occupant against the seat after it
    /// in turn order. Other occupants' lines are invisible to its search.
    #[instrument(skip(config), fields(seats = config.players().len()))]
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seats = config.players().clone();
        let controllers = seats
            .iter()
            .enumerate()
            .map(|(i, seat)| match seat.kind {
                PlayerKind::Human => Controller::Human,
                PlayerKind::Random => Controller::Random(match config.seed() {
                    Some(seed) => RandomSelector::with_seed(seed.wrapping_add(i as u64)),
                    None => RandomSelector::new(),
                }),
                PlayerKind::Minimax => {
                    let next = &seats[(i + 1) % seats.len()];
                    Controller::Minimax(Minimax::new(seat.occupant, next.occupant))
                }
            })
            .collect();

        let board = Board::new(*config.width(), *config.height(), *config.win_length());
        info!(
            width = board.width(),
            height = board.height(),
            win_length = board.win_length(),
            "Match created"
        );

        Ok(Self {
            board,
            seats,
            controllers,
            opener: 0,
            turn: 0,
            round: 1,
            status: RoundStatus::InProgress,
            scores: Scoreboard::default(),
        })
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seats in turn order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The seat whose turn it is.
    pub fn current_seat(&self) -> &Seat {
        &self.seats[self.turn]
    }

    /// Checks if the seat on turn is computer-controlled.
    pub fn is_computer_turn(&self) -> bool {
        self.current_seat().kind != PlayerKind::Human
    }

    /// State of the current round.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Scores across all finished rounds.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Plays `(x, y)` for the seat on turn.
    ///
    /// After the move the board is checked for a winner, then for a draw.
    /// The turn passes to the next seat only while the round continues.
    ///
    /// # Errors
    ///
    /// - [`MatchError::RoundOver`] once the round has a result.
    /// - [`MatchError::Play`] if the board rejects the move; nothing changes.
    #[instrument(skip(self), fields(round = self.round, seat = %self.current_seat().name))]
    pub fn play(&mut self, x: usize, y: usize) -> Result<RoundStatus, MatchError> {
        if self.status != RoundStatus::InProgress {
            warn!("Move submitted after round ended");
            return Err(MatchError::RoundOver);
        }

        let occupant = self.current_seat().occupant;
        self.board.play(occupant, x, y).inspect_err(|e| {
            warn!(error = %e, "Invalid move");
        })?;

        self.status = if let Some(winner) = self.board.winner() {
            *self.scores.wins.entry(winner).or_insert(0) += 1;
            info!(%winner, "Round won");
            RoundStatus::Won(winner)
        } else if self.board.is_draw() {
            self.scores.draws += 1;
            info!("Round drawn");
            RoundStatus::Draw
        } else {
            self.turn = (self.turn + 1) % self.seats.len();
            RoundStatus::InProgress
        };

        debug!(status = ?self.status, "Move completed");
        Ok(self.status)
    }

    /// Lets the computer seat on turn choose and play its move.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NotComputerTurn`] if a human is on turn.
    /// - [`MatchError::RoundOver`] once the round has a result.
    #[instrument(skip(self), fields(round = self.round, seat = %self.current_seat().name))]
    pub fn play_computer_turn(&mut self) -> Result<RoundStatus, MatchError> {
        if self.status != RoundStatus::InProgress {
            return Err(MatchError::RoundOver);
        }

        let selector = self.controllers[self.turn]
            .selector()
            .ok_or(MatchError::NotComputerTurn)?;
        let at = selector
            .select_move(&self.board)
            .ok_or(MatchError::RoundOver)?;

        debug!(%at, "Computer chose move");
        self.play(at.x, at.y)
    }

    /// Clears the board for a rematch.
    ///
    /// The seat that opens passes to the next seat each round. Scores are
    /// kept.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn next_round(&mut self) {
        self.board.clear();
        self.opener = (self.opener + 1) % self.seats.len();
        self.turn = self.opener;
        self.round += 1;
        self.status = RoundStatus::InProgress;
        info!(opener = %self.current_seat().name, "Next round started");
    }

    /// Zeroes all scores. The current round is untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }
}
