//! # gatehouse-plans
//!
//! A TOML-driven plan→capability catalog for the gatehouse access layer.
//!
//! ## Overview
//!
//! This crate provides [`PlanCatalog`], which loads subscription plans from
//! a TOML file and produces [`PlanEntitlements`] — the reference
//! implementation of the [`Entitlements`](gatehouse_core::traits::Entitlements)
//! collaborator trait. The billing system remains the source of truth for
//! which plan an organization is on; this crate only answers "what does
//! that plan include".
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use gatehouse_plans::PlanCatalog;
//!
//! let catalog = PlanCatalog::from_file(Path::new("plans/saas.toml"))?;
//! let entitlements = catalog.entitlements_for("growth")?;
//! ```
//!
//! ## Validation
//!
//! Every capability identifier in the file is checked against the capability
//! catalog at load time. A typo fails the load with an error instead of
//! silently denying at runtime.

pub mod catalog;
pub mod plan;

pub use catalog::{PlanCatalog, PlanEntitlements};
pub use plan::{PlanConfig, PlanSpec};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use gatehouse_contracts::{Capability, GatehouseError};
    use gatehouse_core::traits::Entitlements;

    use crate::PlanCatalog;

    // ── 1. happy path ─────────────────────────────────────────────────────────

    /// A valid file loads and each plan answers for exactly its own set.
    #[test]
    fn test_load_and_lookup() {
        let toml = r#"
            [[plans]]
            id = "starter"
            description = "Entry tier"
            capabilities = []

            [[plans]]
            id = "growth"
            description = "Mid tier"
            capabilities = ["org:deals:unlimited", "org:export:unlimited"]

            [[plans]]
            id = "scale"
            description = "Top tier"
            capabilities = [
                "org:deals:unlimited",
                "org:export:unlimited",
                "org:ai_analysis:use",
                "org:reports:advanced",
            ]
        "#;

        let catalog = PlanCatalog::from_toml_str(toml).unwrap();

        let starter = catalog.entitlements_for("starter").unwrap();
        assert!(starter.is_empty());
        assert!(!starter.has(Capability::DealsUnlimited).unwrap());

        let growth = catalog.entitlements_for("growth").unwrap();
        assert!(growth.has(Capability::DealsUnlimited).unwrap());
        assert!(growth.has(Capability::ExportUnlimited).unwrap());
        assert!(!growth.has(Capability::AiAnalysisUse).unwrap());

        let scale = catalog.entitlements_for("scale").unwrap();
        assert_eq!(scale.len(), 4);
        assert!(scale.has(Capability::AiAnalysisUse).unwrap());
    }

    // ── 2. unknown capability identifier ──────────────────────────────────────

    /// A typo'd capability identifier fails the whole load.
    #[test]
    fn test_unknown_capability_fails_load() {
        let toml = r#"
            [[plans]]
            id = "growth"
            description = "Mid tier"
            capabilities = ["org:deals:unlimitd"]
        "#;

        match PlanCatalog::from_toml_str(toml) {
            Err(GatehouseError::UnknownCapability { id }) => {
                assert_eq!(id, "org:deals:unlimitd");
            }
            other => panic!("expected UnknownCapability, got {:?}", other.err()),
        }
    }

    // ── 3. malformed TOML ─────────────────────────────────────────────────────

    /// Malformed TOML must produce a ConfigError mentioning the parse.
    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match PlanCatalog::from_toml_str(bad_toml) {
            Err(GatehouseError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse plans TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other.err()),
        }
    }

    // ── 4. duplicate plan id ──────────────────────────────────────────────────

    #[test]
    fn test_duplicate_plan_id_fails_load() {
        let toml = r#"
            [[plans]]
            id = "growth"
            description = "Mid tier"
            capabilities = []

            [[plans]]
            id = "growth"
            description = "Mid tier again"
            capabilities = ["org:api:use"]
        "#;

        match PlanCatalog::from_toml_str(toml) {
            Err(GatehouseError::ConfigError { reason }) => {
                assert!(reason.contains("duplicate plan id 'growth'"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other.err()),
        }
    }

    // ── 5. unknown plan id ────────────────────────────────────────────────────

    #[test]
    fn test_unknown_plan_id() {
        let toml = r#"
            [[plans]]
            id = "starter"
            description = "Entry tier"
            capabilities = []
        "#;

        let catalog = PlanCatalog::from_toml_str(toml).unwrap();
        match catalog.entitlements_for("enterprise") {
            Err(GatehouseError::ConfigError { reason }) => {
                assert!(reason.contains("unknown plan id 'enterprise'"), "got: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other.err()),
        }
    }

    // ── 6. omitted capabilities key ───────────────────────────────────────────

    /// `capabilities` may be omitted entirely; it defaults to empty.
    #[test]
    fn test_capabilities_key_defaults_to_empty() {
        let toml = r#"
            [[plans]]
            id = "free"
            description = "No paid features"
        "#;

        let catalog = PlanCatalog::from_toml_str(toml).unwrap();
        assert!(catalog.entitlements_for("free").unwrap().is_empty());
    }
}
