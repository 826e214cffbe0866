//! The permission resolver: one pure function from snapshot to verdict.
//!
//! Resolution order:
//!
//!   loading? → Pending
//!   signed out? → Denied
//!   no membership? → Denied
//!   entitlements.has(capability) → Granted iff Ok(true), else Denied
//!
//! The security invariant is absolute: every unresolved, erroring, or
//! ambiguous path returns `Denied`, never `Granted`, and `resolve()` never
//! panics outward. Every new branch added here must preserve that.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use gatehouse_contracts::{AccessQuery, Capability, Verdict};

use crate::snapshot::ActorSnapshot;

/// Resolve one capability for one actor snapshot.
///
/// Pure: no caching, no side effects beyond log output. Call sites must
/// re-resolve on every snapshot change — two call sites evaluating the same
/// `(snapshot, capability)` pair within one pass always agree.
///
/// Only the actor's *first* membership is consulted. Multi-org actors are a
/// known simplification; see the workspace DESIGN notes.
///
/// The entitlement predicate is untrusted: an `Err` return or a panic is
/// absorbed and mapped to `Denied` (fail closed, never crash the caller).
pub fn resolve(snapshot: &ActorSnapshot, capability: Capability) -> Verdict {
    if !snapshot.identity_loaded {
        debug!(
            session_id = %snapshot.session_id.0,
            capability = %capability,
            "identity still loading, verdict pending"
        );
        return Verdict::Pending;
    }

    if !snapshot.signed_in {
        debug!(
            session_id = %snapshot.session_id.0,
            capability = %capability,
            "actor not signed in, denying"
        );
        return Verdict::Denied;
    }

    let Some(membership) = snapshot.primary_membership() else {
        debug!(
            session_id = %snapshot.session_id.0,
            capability = %capability,
            "signed-in actor has no organization membership, denying"
        );
        return Verdict::Denied;
    };

    let entitlements = membership.entitlements.clone();
    let answer = catch_unwind(AssertUnwindSafe(|| entitlements.has(capability)));

    match answer {
        Ok(Ok(true)) => {
            debug!(
                session_id = %snapshot.session_id.0,
                org_id = %membership.org_id.0,
                capability = %capability,
                "capability granted"
            );
            Verdict::Granted
        }
        Ok(Ok(false)) => {
            debug!(
                session_id = %snapshot.session_id.0,
                org_id = %membership.org_id.0,
                capability = %capability,
                "plan does not include capability, denying"
            );
            Verdict::Denied
        }
        Ok(Err(e)) => {
            warn!(
                session_id = %snapshot.session_id.0,
                org_id = %membership.org_id.0,
                capability = %capability,
                error = %e,
                "entitlement check failed, denying"
            );
            Verdict::Denied
        }
        Err(_) => {
            warn!(
                session_id = %snapshot.session_id.0,
                org_id = %membership.org_id.0,
                capability = %capability,
                "entitlement predicate panicked, denying"
            );
            Verdict::Denied
        }
    }
}

/// Read-only projection of [`resolve`] for non-presentational call sites.
///
/// Same resolver, no rendering logic: a guard and a query checking the same
/// capability for the same snapshot never disagree within one pass.
pub fn access_query(snapshot: &ActorSnapshot, capability: Capability) -> AccessQuery {
    let verdict = resolve(snapshot, capability);
    AccessQuery {
        verdict,
        is_loading: verdict.is_pending(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
