//! TOML-driven plan catalog and the reference `Entitlements` it produces.
//!
//! `PlanCatalog` loads a `PlanConfig` from a TOML string or file, validates
//! every capability identifier against the capability catalog, and hands
//! out `PlanEntitlements` — an infallible set-lookup implementation of the
//! `Entitlements` trait for one plan.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, warn};

use gatehouse_contracts::{
    error::{GatehouseError, GatehouseResult},
    Capability,
};
use gatehouse_core::traits::Entitlements;

use crate::plan::PlanConfig;

/// A validated mapping from plan id to granted capability set.
///
/// Construct via `from_toml_str` or `from_file`, then call
/// `entitlements_for` per organization.
#[derive(Debug)]
pub struct PlanCatalog {
    plans: HashMap<String, HashSet<Capability>>,
}

impl PlanCatalog {
    /// Parse `s` as TOML and build a validated `PlanCatalog`.
    ///
    /// Returns `GatehouseError::ConfigError` if the TOML is malformed, a
    /// plan id repeats, or any capability identifier is not in the catalog.
    pub fn from_toml_str(s: &str) -> GatehouseResult<Self> {
        let config: PlanConfig = toml::from_str(s).map_err(|e| GatehouseError::ConfigError {
            reason: format!("failed to parse plans TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a TOML plans file.
    pub fn from_file(path: &Path) -> GatehouseResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GatehouseError::ConfigError {
            reason: format!("failed to read plans file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn from_config(config: PlanConfig) -> GatehouseResult<Self> {
        let mut plans = HashMap::new();

        for spec in config.plans {
            let mut granted = HashSet::new();
            for id in &spec.capabilities {
                let Some(capability) = Capability::parse_id(id) else {
                    warn!(
                        plan = %spec.id,
                        capability = %id,
                        "plans file references a capability not in the catalog"
                    );
                    return Err(GatehouseError::UnknownCapability { id: id.clone() });
                };
                granted.insert(capability);
            }

            debug!(
                plan = %spec.id,
                capabilities = granted.len(),
                "loaded plan"
            );

            if plans.insert(spec.id.clone(), granted).is_some() {
                return Err(GatehouseError::ConfigError {
                    reason: format!("duplicate plan id '{}'", spec.id),
                });
            }
        }

        Ok(Self { plans })
    }

    /// All loaded plan ids, for diagnostics and demo listings.
    pub fn plan_ids(&self) -> impl Iterator<Item = &str> {
        self.plans.keys().map(String::as_str)
    }

    /// Build the entitlement predicate for one plan.
    ///
    /// Returns `GatehouseError::ConfigError` for a plan id the catalog does
    /// not know — an organization on an unknown plan is a wiring bug, not a
    /// deny.
    pub fn entitlements_for(&self, plan_id: &str) -> GatehouseResult<PlanEntitlements> {
        let granted = self.plans.get(plan_id).ok_or_else(|| GatehouseError::ConfigError {
            reason: format!("unknown plan id '{}'", plan_id),
        })?;
        Ok(PlanEntitlements { granted: granted.clone() })
    }
}

/// The capability set of one plan, as an `Entitlements` implementation.
///
/// Lookup never fails; this is the reference (reliable) collaborator the
/// demo and tests wire into actor snapshots.
#[derive(Debug, Clone)]
pub struct PlanEntitlements {
    granted: HashSet<Capability>,
}

impl PlanEntitlements {
    /// The number of capabilities this plan grants.
    pub fn len(&self) -> usize {
        self.granted.len()
    }

    /// True if the plan grants nothing.
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

impl Entitlements for PlanEntitlements {
    fn has(&self, capability: Capability) -> GatehouseResult<bool> {
        Ok(self.granted.contains(&capability))
    }
}
