//! Game configuration loaded from TOML

use crate::error::{ReflexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Largest grid a session will allocate targets for
pub const MAX_TARGETS: u32 = 1 << 16;

/// Tunable constants for a reaction game session.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides. An empty file yields [`GameConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Columns of the target grid
    pub grid_columns: u32,
    /// Rows of the target grid
    pub grid_rows: u32,
    /// Upper bound on simultaneously active targets
    pub max_active: u32,
    /// Spawner period in milliseconds
    pub spawn_interval_ms: u64,
    /// Starting value of the countdown, in seconds
    pub countdown_secs: u32,
    /// Countdown period in milliseconds
    pub countdown_interval_ms: u64,
    /// Seed for target selection; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_columns: 4,
            grid_rows: 4,
            max_active: 3,
            spawn_interval_ms: 700,
            countdown_secs: 30,
            countdown_interval_ms: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load and validate a config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded game config");
        Ok(config)
    }

    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Check the invariants the game loop relies on
    pub fn validate(&self) -> Result<()> {
        if self.grid_columns == 0 {
            return Err(ReflexError::invalid_config("grid_columns", "must be greater than 0"));
        }
        if self.grid_rows == 0 {
            return Err(ReflexError::invalid_config("grid_rows", "must be greater than 0"));
        }
        let targets = match self.grid_columns.checked_mul(self.grid_rows) {
            Some(n) if n <= MAX_TARGETS => n,
            _ => {
                return Err(ReflexError::invalid_config(
                    "grid_rows",
                    format!("grid must hold at most {MAX_TARGETS} targets"),
                ))
            }
        };
        if self.max_active == 0 {
            return Err(ReflexError::invalid_config("max_active", "must be greater than 0"));
        }
        if self.max_active > targets {
            return Err(ReflexError::invalid_config(
                "max_active",
                format!("must not exceed the target count ({targets})"),
            ));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ReflexError::invalid_config("spawn_interval_ms", "must be greater than 0"));
        }
        if self.countdown_secs == 0 {
            return Err(ReflexError::invalid_config("countdown_secs", "must be greater than 0"));
        }
        if self.countdown_interval_ms == 0 {
            return Err(ReflexError::invalid_config(
                "countdown_interval_ms",
                "must be greater than 0",
            ));
        }
        // TOML integers are signed 64-bit
        if self.seed.is_some_and(|seed| seed > i64::MAX as u64) {
            return Err(ReflexError::invalid_config(
                "seed",
                format!("must not exceed {}", i64::MAX),
            ));
        }
        Ok(())
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }
}
