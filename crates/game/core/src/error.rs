//! Common error infrastructure for survivor-core.
//!
//! Domain-specific errors (`ProgressionError`, `TierError`, `CombatError`) live
//! next to the functions that produce them. They all implement [`GameError`]
//! so callers can classify failures uniformly.
//!
//! Every error in this crate is a contract violation by the caller: inputs
//! outside the documented domain are rejected instead of being clamped, so
//! upstream decoding bugs surface where they happen.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: tier 6, adventurer level 0
    Validation,

    /// Arithmetic limits reached. Indicates a value that cannot come from the
    /// contract and points to a decoding bug upstream.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an upstream bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all survivor-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Return a stable, upper-snake-case code from `error_code`
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
