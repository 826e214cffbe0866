//! Error types for the gatehouse access layer.
//!
//! Faults inside capability resolution are never surfaced as errors — they
//! are absorbed and mapped to `Verdict::Denied` (fail closed). This enum
//! covers the operations that legitimately fail: configuration loading,
//! session-feed misuse, entitlement predicate failure, and navigation.

use thiserror::Error;

/// The unified error type for the gatehouse crates.
#[derive(Debug, Error)]
pub enum GatehouseError {
    /// A plan catalog or other configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A capability identifier at a dynamic boundary is not in the catalog.
    #[error("unknown capability identifier '{id}'")]
    UnknownCapability { id: String },

    /// The external entitlement predicate could not answer.
    ///
    /// The resolver maps this to `Denied`; it never reaches the caller of
    /// `resolve()`.
    #[error("entitlement check failed: {reason}")]
    EntitlementUnavailable { reason: String },

    /// A published actor snapshot would move the session backwards
    /// (identity loaded → loading again). Rejected to preserve the
    /// monotonic-loading guarantee.
    #[error("session regression: {reason}")]
    SessionRegression { reason: String },

    /// The navigation collaborator failed to perform a redirect.
    #[error("navigation to '{destination}' failed: {reason}")]
    NavigationFailed { destination: String, reason: String },
}

/// Convenience alias used throughout the gatehouse crates.
pub type GatehouseResult<T> = Result<T, GatehouseError>;
