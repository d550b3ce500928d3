//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! Every random decision is drawn from the caller's [`crate::env::RngSource`]
//! in a fixed order, so a scripted source pins down each outcome.
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete attack resolution (miss roll, damage, critical)
//! - `roll_miss` / `roll_critical`: the individual probability checks
//! - `apply_damage`: hit point reduction (no clamping)

pub mod damage;
pub mod hit;
pub mod profile;
pub mod result;

pub use damage::apply_damage;
pub use hit::{roll_critical, roll_miss};
pub use profile::AttackProfile;
pub use result::{AttackOutcome, resolve_attack};
