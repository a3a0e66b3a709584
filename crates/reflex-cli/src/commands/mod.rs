//! CLI command implementations

pub mod config;
pub mod play;
pub mod simulate;

use anyhow::{Context, Result};
use clap::Args;
use reflex_core::GameConfig;
use std::path::Path;

/// Config file plus per-run overrides, shared by `play` and `simulate`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to a game config TOML file
    #[arg(long)]
    pub config: Option<String>,

    /// Seed for target selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grid columns
    #[arg(long)]
    pub columns: Option<u32>,

    /// Grid rows
    #[arg(long)]
    pub rows: Option<u32>,

    /// Maximum simultaneously lit targets
    #[arg(long)]
    pub max_active: Option<u32>,

    /// Round length in seconds
    #[arg(long)]
    pub duration: Option<u32>,
}

impl ConfigArgs {
    /// Load the config file (or defaults) and apply command-line overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(Path::new(path))
                .with_context(|| format!("Failed to load config '{}'", path))?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(columns) = self.columns {
            config.grid_columns = columns;
        }
        if let Some(rows) = self.rows {
            config.grid_rows = rows;
        }
        if let Some(max_active) = self.max_active {
            config.max_active = max_active;
        }
        if let Some(duration) = self.duration {
            config.countdown_secs = duration;
        }

        config.validate().context("Invalid game config")?;
        Ok(config)
    }
}
