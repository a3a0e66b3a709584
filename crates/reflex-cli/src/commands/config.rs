//! Config command — prints or writes the default game config

use anyhow::{Context, Result};
use reflex_core::GameConfig;
use std::path::Path;

pub fn run(output: Option<&str>) -> Result<()> {
    let config = GameConfig::default();

    match output {
        Some(path) => {
            if Path::new(path).exists() {
                anyhow::bail!("File '{}' already exists", path);
            }
            config
                .save(path)
                .with_context(|| format!("Failed to write '{}'", path))?;
            println!("Wrote default config to {}", path);
        }
        None => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}
