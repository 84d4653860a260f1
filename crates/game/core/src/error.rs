//! Common error infrastructure for raid-core.
//!
//! Domain-specific errors (`PowerError`, `SolverError`, `SessionError`) live
//! next to the code that raises them. This module provides the classification
//! shared by all of them so callers can decide between aborting and ignoring.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input from the adapter, reject without retry
/// - **Configuration**: Static tables are incomplete, the encounter cannot be planned
/// - **Internal**: Violated precondition inside the crate, indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: duplicate roster entry, event delivered after the session ended
    Validation,

    /// Missing or inconsistent static configuration.
    ///
    /// Examples: stats table lacks an entry for a reported worker kind
    Configuration,

    /// Unexpected precondition failure.
    ///
    /// Examples: solver handed an attacker pool larger than the search cap
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }

    /// Returns true if planning must be aborted for this error.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration | Self::Internal)
    }
}

/// Common trait for all raid-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings usable in logs and tests
pub trait RaidError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
