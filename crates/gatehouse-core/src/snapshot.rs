//! The actor snapshot: one read-only view of the session per evaluation.
//!
//! A snapshot distinguishes the three conditions the resolver branches on:
//! identity still loading, loaded but signed out, and signed in (with zero
//! or more organization memberships). Snapshots are supplied by the
//! identity collaborator; gatehouse never mutates one.

use std::fmt;
use std::sync::Arc;

use gatehouse_contracts::{OrgId, SessionId};

use crate::traits::Entitlements;

/// One organization membership: the tenant's id plus its entitlement
/// predicate from the billing integration.
#[derive(Clone)]
pub struct Membership {
    /// Which organization this membership belongs to.
    pub org_id: OrgId,
    /// The organization's capability predicate. Shared, never cloned deeply.
    pub entitlements: Arc<dyn Entitlements>,
}

impl Membership {
    /// Pair an organization with its entitlement predicate.
    pub fn new(org_id: OrgId, entitlements: Arc<dyn Entitlements>) -> Self {
        Self { org_id, entitlements }
    }
}

impl fmt::Debug for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Membership")
            .field("org_id", &self.org_id)
            .finish_non_exhaustive()
    }
}

/// A point-in-time view of the actor and their session.
///
/// Only the first membership is consulted by the resolver; multi-org actors
/// get their first organization's entitlements (see `resolve()` docs).
#[derive(Debug, Clone)]
pub struct ActorSnapshot {
    /// Scopes log lines and the monotonic-loading guarantee.
    pub session_id: SessionId,
    /// False while the identity subsystem is still resolving the session.
    pub identity_loaded: bool,
    /// Whether a signed-in actor is present. Meaningless until
    /// `identity_loaded` is true — loading and sign-in resolve together.
    pub signed_in: bool,
    /// The actor's organization memberships, in identity-provider order.
    pub memberships: Vec<Membership>,
}

impl ActorSnapshot {
    /// Snapshot for a session whose identity is still loading.
    pub fn loading() -> Self {
        Self {
            session_id: SessionId::new(),
            identity_loaded: false,
            signed_in: false,
            memberships: Vec::new(),
        }
    }

    /// Snapshot for a loaded session with no signed-in actor.
    pub fn signed_out() -> Self {
        Self {
            session_id: SessionId::new(),
            identity_loaded: true,
            signed_in: false,
            memberships: Vec::new(),
        }
    }

    /// Snapshot for a signed-in actor with the given memberships.
    ///
    /// An empty `memberships` list is valid: a signed-in actor who belongs
    /// to no organization is denied every capability.
    pub fn signed_in(memberships: Vec<Membership>) -> Self {
        Self {
            session_id: SessionId::new(),
            identity_loaded: true,
            signed_in: true,
            memberships,
        }
    }

    /// The membership the resolver will consult, if any (first wins).
    pub fn primary_membership(&self) -> Option<&Membership> {
        self.memberships.first()
    }
}
