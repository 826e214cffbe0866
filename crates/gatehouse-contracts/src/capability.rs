//! The capability catalog: the closed vocabulary of checkable permissions.
//!
//! Every feature gate in the product names a `Capability` variant, never a
//! raw string. Referencing a capability that does not exist is therefore a
//! compile error, not a silent runtime deny. The catalog is append-only in
//! practice: removing a variant is a breaking change for every call site.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A named, checkable permission unit, independent of how it was purchased.
///
/// The wire identifier (`org:<resource>:<qualifier>`) is the contract shared
/// with the external billing/entitlement system; see [`Capability::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Run AI analysis over deal data.
    AiAnalysisUse,
    /// Create an unlimited number of deals.
    DealsUnlimited,
    /// Export without row limits.
    ExportUnlimited,
    /// Manage the organization's billing settings.
    BillingManage,
    /// 50 GB attachment storage quota.
    Storage50Gb,
    /// Invite an unlimited number of seats.
    SeatsUnlimited,
    /// Access the advanced reporting suite.
    ReportsAdvanced,
    /// Use the public API.
    ApiAccess,
}

impl Capability {
    /// Every capability in the catalog, for enumeration and config validation.
    pub const ALL: &'static [Capability] = &[
        Capability::AiAnalysisUse,
        Capability::DealsUnlimited,
        Capability::ExportUnlimited,
        Capability::BillingManage,
        Capability::Storage50Gb,
        Capability::SeatsUnlimited,
        Capability::ReportsAdvanced,
        Capability::ApiAccess,
    ];

    /// The stable wire identifier for this capability.
    ///
    /// Format: `org:<resource>:<qualifier>`, lowercase ASCII with
    /// underscores. These strings are what the billing system's plan
    /// definitions reference; they never change once shipped.
    pub fn id(&self) -> &'static str {
        match self {
            Capability::AiAnalysisUse => "org:ai_analysis:use",
            Capability::DealsUnlimited => "org:deals:unlimited",
            Capability::ExportUnlimited => "org:export:unlimited",
            Capability::BillingManage => "org:billing:manage",
            Capability::Storage50Gb => "org:storage:50gb",
            Capability::SeatsUnlimited => "org:seats:unlimited",
            Capability::ReportsAdvanced => "org:reports:advanced",
            Capability::ApiAccess => "org:api:use",
        }
    }

    /// Look up a capability by its wire identifier.
    ///
    /// Returns `None` for identifiers not in the catalog. Callers at dynamic
    /// boundaries (config files, external payloads) must treat `None` as a
    /// load-time error or a deny, never as a grant.
    pub fn parse_id(id: &str) -> Option<Capability> {
        Capability::ALL.iter().copied().find(|c| c.id() == id)
    }

    /// Return true if `id` is a well-formed wire identifier.
    ///
    /// Well-formed means: ASCII, exactly three non-empty colon-separated
    /// segments, each segment lowercase letters, digits, or underscores.
    /// This validates the *format* only; a well-formed identifier may still
    /// be unknown to the catalog.
    pub fn is_wire_id(id: &str) -> bool {
        let segments: Vec<&str> = id.split(':').collect();
        if segments.len() != 3 {
            return false;
        }
        segments.iter().all(|seg| {
            !seg.is_empty()
                && seg
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        })
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// Serde goes through the wire identifier so config files and payloads read
// naturally ("org:ai_analysis:use"), and unknown identifiers fail to
// deserialize instead of silently mapping to some variant.

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Capability::parse_id(&id).ok_or_else(|| {
            de::Error::custom(format!("unknown capability identifier '{}'", id))
        })
    }
}
