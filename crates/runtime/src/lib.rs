//! Session orchestration around the deterministic game rules.
//!
//! `game-core` is pure: it needs a state, a config and a random source passed
//! in on every call. This crate bundles the three into a [`Session`], seeds
//! the random source, loads settings through `game-content`, and logs the
//! life cycle of a game with `tracing`.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`rng`] adapts the `rand` ecosystem to [`game_core::RngSource`]
//! - [`error`] wraps every failure in [`RuntimeError`]
pub mod error;
pub mod rng;
pub mod session;

pub use error::{Result, RuntimeError};
pub use rng::StdRngSource;
pub use session::{Session, SessionBuilder};
