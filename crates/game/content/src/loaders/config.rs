//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every table and key is optional; missing values keep their defaults. The
/// result is validated, so a returned config can always start a session.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse and validate config data from TOML text.
    pub fn from_str(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }
}
