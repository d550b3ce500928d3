//! Data-driven game settings.
//!
//! This crate reads [`game_core::GameConfig`] from TOML files so balance can
//! be tuned without recompiling. Content is consumed when a session starts
//! and never appears in game state.
//!
//! Loaders use game-core types directly with serde for TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult};
