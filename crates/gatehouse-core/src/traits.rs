//! Collaborator trait definitions for the gatehouse access layer.
//!
//! These three traits define the trust boundary:
//!
//! - `Entitlements`     — untrusted predicate (backed by the external
//!                        billing integration; may fail or panic)
//! - `IdentityProvider` — trusted source of actor snapshots
//! - `Navigator`        — trusted sink for client-side redirects
//!
//! The resolver and guard only ever *read* through these traits; gatehouse
//! never writes back to the identity or billing collaborators.

use gatehouse_contracts::{error::GatehouseResult, Capability};

use crate::snapshot::ActorSnapshot;

/// The organization's capability predicate, sourced from the external
/// billing/entitlement integration.
///
/// Implementations are considered **unreliable**: `has()` may return `Err`,
/// and a buggy integration may even panic. The resolver absorbs both and
/// maps them to `Verdict::Denied` — a crashed access check fails closed.
pub trait Entitlements: Send + Sync {
    /// Return whether the organization's plan includes `capability`.
    ///
    /// Must be synchronous and side-effect free. Return `Err` when the
    /// answer is unavailable (stale token, integration outage); never guess.
    fn has(&self, capability: Capability) -> GatehouseResult<bool>;
}

/// The identity/session collaborator.
///
/// Owns the loading flag, the sign-in state, and organization memberships.
/// Gatehouse reads a fresh snapshot per evaluation cycle and never caches
/// across snapshots — capability state can change asynchronously (a plan
/// upgrade completing in another tab).
pub trait IdentityProvider: Send + Sync {
    /// Return the current actor snapshot.
    fn snapshot(&self) -> ActorSnapshot;
}

/// The navigation collaborator: performs a client-side redirect.
///
/// Gatehouse calls this for the `redirect-to` enforcement strategy and for
/// the upgrade panel's primary action; it does not implement routing.
pub trait Navigator: Send + Sync {
    /// Navigate to `destination` (an app-internal path such as "/pricing").
    fn navigate(&self, destination: &str) -> GatehouseResult<()>;
}
