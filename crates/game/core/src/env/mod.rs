//! External inputs the rules consume but do not own.
//!
//! The only environmental input of the engine is randomness; it is threaded
//! explicitly through every operation that needs it.
mod rng;

pub use rng::{PcgRng, RngSource, ScriptedRng};
