//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `MapError`, `SpawnError`, `TurnError`) are
//! defined next to the operations that produce them. This module provides
//! the shared classification used by all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Configuration**: the session could not be created from the given settings
/// - **Contract**: the caller broke a precondition (programmer error)
/// - **Internal**: unexpected state inconsistency, indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid settings; fix the configuration and start a new session.
    ///
    /// Examples: map too small for the requested spawns, inverted damage range
    Configuration,

    /// Precondition violated by the caller; do not retry.
    ///
    /// Examples: zero-size grid, command issued after game over
    Contract,

    /// Unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Contract => "contract",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who must act, not on impact
/// - Error codes are stable identifiers for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
