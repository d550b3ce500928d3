//! Content factory for loading settings from a data directory.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── game.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "game.toml";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `game.toml`, or defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(GameConfig::default())
        }
    }
}
