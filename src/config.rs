use std::path::Path;

use rand::Rng;
use tracing::warn;

use crate::ai::{Searcher, TieBreak};
use crate::error::ConfigError;
use crate::game::Piece;

/// Longest cosmetic pause allowed before the computer moves.
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

/// Who drops the first piece of each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstMover {
    Player,
    Computer,
    #[default]
    Random,
}

impl FirstMover {
    /// Resolve to a concrete piece, flipping a coin for `Random`.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Piece {
        match self {
            FirstMover::Player => Piece::Player,
            FirstMover::Computer => Piece::Computer,
            FirstMover::Random => {
                if rng.random_bool(0.5) {
                    Piece::Player
                } else {
                    Piece::Computer
                }
            }
        }
    }
}

/// Game session settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_mover: FirstMover,
    /// Pause before the computer's move, purely for the player's benefit.
    pub computer_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_mover: FirstMover::Random,
            computer_delay_ms: 500,
        }
    }
}

/// Search settings. Depth is fixed; only the root tie-break is configurable.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub tie_break: TieBreak,
    /// Seed for random tie-breaks; OS entropy when absent.
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Build the searcher described by this section.
    pub fn searcher(&self) -> Searcher {
        Searcher::new().with_tie_break(self.tie_break, self.seed)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.computer_delay_ms must be <= {MAX_COMPUTER_DELAY_MS}"
            )));
        }
        if self.search.seed.is_some() && self.search.tie_break != TieBreak::Random {
            return Err(ConfigError::Validation(
                "search.seed is only used with tie_break = \"random\"".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
