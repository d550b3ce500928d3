//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one run of the binary.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Fixed seed for a reproducible dungeon; random when absent.
    pub seed: Option<u64>,
    /// TOML file with game settings; built-in defaults when absent.
    pub config_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ROGUE_SEED` - u64 seed for the random source
    /// - `ROGUE_CONFIG` - path to a game settings TOML file
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("ROGUE_SEED"),
            config_path: env::var_os("ROGUE_CONFIG").map(PathBuf::from),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
