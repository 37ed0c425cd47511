use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    backgammon::{Board, Color},
    error::{Error, Result},
};

/// Game setup, loadable from TOML:
///
/// ```toml
/// checkers_per_side = 15
/// seed = 42
/// first_turn = "White"
///
/// [rules]
/// enforce_direction = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub checkers_per_side: u8,
    /// Fixed seed for reproducible dice. Random when absent.
    pub seed: Option<u64>,
    pub first_turn: Color,
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// White only moves to higher cells and Black only to lower ones.
    pub enforce_direction: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            checkers_per_side: Board::MAX_CHECKERS_PER_SIDE,
            seed: None,
            first_turn: Color::White,
            rules: RuleConfig::default(),
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig { enforce_direction: true }
    }
}

impl GameConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=Board::MAX_CHECKERS_PER_SIDE).contains(&self.checkers_per_side) {
            return Err(Error::Config(format!(
                "checkers_per_side must be between 1 and {}, got {}",
                Board::MAX_CHECKERS_PER_SIDE,
                self.checkers_per_side
            )));
        }
        Ok(())
    }
}
