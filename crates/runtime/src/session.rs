//! A single playthrough: state, settings and random source kept together.

use std::path::{Path, PathBuf};

use game_content::ConfigLoader;
use game_core::{
    Command, Direction, GameConfig, GameEngine, GameState, RngSource, TurnReport, new_game,
};

use crate::error::{Result, RuntimeError};
use crate::rng::StdRngSource;

/// One running game.
///
/// Every command takes `&mut self`, so commands are serialized by the borrow
/// checker; a host that needs shared access wraps the session in its own lock.
pub struct Session {
    state: GameState,
    config: GameConfig,
    rng: Box<dyn RngSource + Send>,
    seed: Option<u64>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Starts a session with default settings and the given seed.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::builder().seed(seed).build()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the random source was created from, when known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Resolves one command as a full turn.
    pub fn execute(&mut self, command: Command) -> Result<TurnReport> {
        let mut engine = GameEngine::new(&mut self.state, &self.config);
        let report = match engine.execute(command, &mut *self.rng) {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(%command, error = %err, "command refused");
                return Err(err.into());
            }
        };

        tracing::debug!(
            %command,
            acted = report.acted,
            turn = report.turn_number,
            events = report.events.len(),
            "command resolved"
        );
        if report.is_game_over() {
            tracing::info!(
                turn = report.turn_number,
                enemies_left = self.state.entities.enemy_count(),
                "player defeated"
            );
        }
        Ok(report)
    }

    pub fn move_player(&mut self, direction: Direction) -> Result<TurnReport> {
        self.execute(Command::Move(direction))
    }

    pub fn attack(&mut self) -> Result<TurnReport> {
        self.execute(Command::Attack)
    }

    /// Full state as JSON, for renderers living outside the process.
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string(&self.state).map_err(RuntimeError::Snapshot)
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: Option<GameConfig>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    rng: Option<Box<dyn RngSource + Send>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: None,
            config_path: None,
            seed: None,
            rng: None,
        }
    }

    /// Override game settings.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load game settings from a TOML file when building.
    ///
    /// Takes precedence over [`SessionBuilder::config`].
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Seed a [`StdRngSource`].
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a caller-provided random source, e.g. a scripted one in tests.
    ///
    /// Takes precedence over [`SessionBuilder::seed`].
    pub fn rng(mut self, rng: impl RngSource + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the session: load settings, seed randomness, generate the dungeon.
    pub fn build(self) -> Result<Session> {
        let config = match self.config_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading game config");
                ConfigLoader::load(&path)?
            }
            None => self.config.unwrap_or_default(),
        };

        let mut rng: Box<dyn RngSource + Send> = match (self.rng, self.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(StdRngSource::seeded(seed)),
            (None, None) => Box::new(StdRngSource::from_entropy()),
        };

        let state = new_game(&config, &mut *rng)?;

        tracing::info!(
            seed = ?self.seed,
            width = config.map.width,
            height = config.map.height,
            floors = state.grid.floor_count(),
            enemies = state.entities.enemy_count(),
            items = state.entities.item_count(),
            "session started"
        );

        Ok(Session {
            state,
            config,
            rng,
            seed: self.seed,
        })
    }
}
