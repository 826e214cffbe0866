//! Identifier newtypes for actors, sessions, and organizations.
//!
//! The full actor snapshot lives in gatehouse-core (it embeds the
//! `Entitlements` collaborator trait); only the plain identifiers live here.

use serde::{Deserialize, Serialize};

/// Stable identifier for a tenant organization.
///
/// Opaque to this layer; assigned by the identity service.
/// Example: OrgId("org_8f2k1x")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgId(pub String);

/// Unique identifier for one browser/session lifecycle.
///
/// Appears in every log line emitted while resolving access for the
/// session, and scopes the monotonic-loading guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub uuid::Uuid);

impl SessionId {
    /// Create a new, unique session ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}
