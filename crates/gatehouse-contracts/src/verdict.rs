//! The tri-state access verdict and its read-only query projection.
//!
//! A `Verdict` is produced fresh on every evaluation and never persisted.
//! Gatehouse is default-deny: every unresolved, erroring, or ambiguous path
//! resolves to `Denied`, never to `Granted`.

use serde::{Deserialize, Serialize};

/// The result of evaluating one capability for one actor snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The identity subsystem has not finished loading. Transient, not an
    /// error; within one session lifecycle it strictly precedes the other
    /// two and never recurs after loading completes.
    Pending,

    /// Access is not granted. Expected outcome, not an error; surfaced as
    /// an upgrade prompt or silent omission, never as an exception.
    Denied,

    /// The actor's organization holds the capability.
    Granted,
}

impl Verdict {
    /// Return true only for `Granted`.
    pub fn is_granted(&self) -> bool {
        matches!(self, Verdict::Granted)
    }

    /// Return true only for `Pending`.
    pub fn is_pending(&self) -> bool {
        matches!(self, Verdict::Pending)
    }
}

/// Plain-data view of an access check for call sites that branch logic
/// (disable a button, alter copy) instead of swapping rendered subtrees.
///
/// Built by `gatehouse_core::access_query` from the same resolver the guard
/// uses, so a guard and a query checking the same capability for the same
/// snapshot always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessQuery {
    /// The verdict for the queried capability.
    pub verdict: Verdict,
    /// True while the identity subsystem is still loading (verdict is
    /// `Pending` exactly when this is true).
    pub is_loading: bool,
}
