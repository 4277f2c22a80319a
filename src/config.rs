//! Match configuration, loaded from TOML.
//!
//! ```toml
//! width = 4
//! height = 4
//! win_length = 3
//!
//! [[players]]
//! name = "Ada"
//! occupant = "circle"
//! kind = "human"
//!
//! [[players]]
//! name = "Deep Cross"
//! occupant = "cross"
//! kind = "minimax"
//! ```

use crate::games::mnk::Occupant;
use crate::session::{PlayerKind, Seat};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Fewest seats a match can have.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a match can have, one per occupant symbol.
pub const MAX_PLAYERS: usize = 4;

/// Board dimensions and seating for a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board width. Values below the board minimum are raised.
    #[serde(default = "default_side")]
    width: usize,

    /// Board height. Values below the board minimum are raised.
    #[serde(default = "default_side")]
    height: usize,

    /// Aligned cells needed to win. Clamped to fit the board.
    #[serde(default = "default_side")]
    win_length: usize,

    /// Seed for random players. Seeded from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Seats in turn order.
    #[serde(default = "default_players")]
    players: Vec<Seat>,
}

fn default_side() -> usize {
    3
}

fn default_players() -> Vec<Seat> {
    vec![
        Seat::new("Player 1".to_string(), Occupant::Circle, PlayerKind::Human),
        Seat::new("Player 2".to_string(), Occupant::Cross, PlayerKind::Minimax),
    ]
}

impl MatchConfig {
    /// Creates a configuration with OS-seeded random players.
    #[instrument(skip(players), fields(seats = players.len()))]
    pub fn new(width: usize, height: usize, win_length: usize, players: Vec<Seat>) -> Self {
        Self {
            width,
            height,
            win_length,
            seed: None,
            players,
        }
    }

    /// Returns the configuration with random players seeded by `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            width = config.width,
            height = config.height,
            win_length = config.win_length,
            seats = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks the seating: between [`MIN_PLAYERS`] and [`MAX_PLAYERS`]
    /// seats, each with its own occupant.
    ///
    /// Board dimensions are not checked here; the board normalizes them.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seats = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&seats) {
            warn!(seats, "Invalid seat count");
            return Err(ConfigError::new(format!(
                "Expected {} to {} players, found {}",
                MIN_PLAYERS, MAX_PLAYERS, seats
            )));
        }

        let mut seen = HashSet::new();
        for seat in &self.players {
            if !seen.insert(*seat.occupant()) {
                warn!(occupant = %seat.occupant(), "Duplicate occupant");
                return Err(ConfigError::new(format!(
                    "Occupant {} is assigned to more than one player",
                    seat.occupant()
                )));
            }
        }

        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(default_side(), default_side(), default_side(), default_players())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
