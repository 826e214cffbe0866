//! Plan definition types and configuration schema.
//!
//! A `PlanConfig` is deserialized from TOML and holds the list of
//! subscription plans with the capability identifiers each one includes.
//! Identifiers are kept as plain strings at this layer so the file reads
//! exactly like the billing system's wire contract; `PlanCatalog` validates
//! them against the capability catalog at load time.

use serde::{Deserialize, Serialize};

/// One subscription plan as declared in TOML.
///
/// Example:
/// ```toml
/// [[plans]]
/// id = "growth"
/// description = "For teams outgrowing the starter limits"
/// capabilities = ["org:deals:unlimited", "org:export:unlimited"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSpec {
    /// Stable plan identifier, matching the billing system's plan code.
    pub id: String,

    /// Human-readable description of who the plan is for.
    pub description: String,

    /// Wire identifiers of every capability the plan includes. Each must
    /// exist in the capability catalog; an unknown identifier fails the
    /// whole load (a typo here must not silently deny at runtime).
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// The top-level structure deserialized from a TOML plans file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// All plans, in no particular order. Plan ids must be unique.
    pub plans: Vec<PlanSpec>,
}
