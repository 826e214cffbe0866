//! # gatehouse-guard
//!
//! The presentation-boundary access guard for the gatehouse access layer.
//!
//! ## Overview
//!
//! This crate provides [`AccessGuard`], which gates a call site's content on
//! a single capability, plus the pure [`decide_outcome`] decision step and
//! the [`perform`] effect step it composes. Four enforcement strategies are
//! available for denied actors: render-fallback (default), hide, redirect,
//! and an inline upgrade panel.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use gatehouse_contracts::Capability;
//! use gatehouse_guard::{AccessGuard, EnforcementStrategy};
//!
//! let guard = AccessGuard::with_strategy(
//!     Capability::AiAnalysisUse,
//!     EnforcementStrategy::upgrade_prompt("/pricing"),
//! );
//! let rendered = guard.enforce(&snapshot, analysis_panel, None, &router);
//! ```
//!
//! ## Guarantees
//!
//! Children are rendered only when the resolver returns `Granted` for the
//! exact capability configured on the guard, and on `Granted` the children
//! come back untouched — no wrapping, no behavior change.

pub mod guard;
pub mod outcome;

pub use guard::{perform, AccessGuard, Rendered};
pub use outcome::{
    decide_outcome, EnforcementStrategy, Outcome, UpgradePanel, DEFAULT_UPGRADE_DESTINATION,
};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use gatehouse_contracts::{
        error::{GatehouseError, GatehouseResult},
        Capability, OrgId, Verdict,
    };
    use gatehouse_core::{
        access_query, resolve,
        snapshot::{ActorSnapshot, Membership},
        traits::{Entitlements, Navigator},
    };

    use crate::{decide_outcome, AccessGuard, EnforcementStrategy, Outcome, Rendered};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Grants exactly the listed capabilities.
    struct FixedEntitlements {
        granted: Vec<Capability>,
    }

    impl Entitlements for FixedEntitlements {
        fn has(&self, capability: Capability) -> GatehouseResult<bool> {
            Ok(self.granted.contains(&capability))
        }
    }

    /// A navigator that records every destination it was asked to visit.
    struct RecordingNavigator {
        visited: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingNavigator {
        fn new() -> Self {
            Self { visited: Arc::new(Mutex::new(vec![])) }
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, destination: &str) -> GatehouseResult<()> {
            self.visited.lock().unwrap().push(destination.to_string());
            Ok(())
        }
    }

    /// A navigator whose router has gone away.
    struct FailingNavigator;

    impl Navigator for FailingNavigator {
        fn navigate(&self, destination: &str) -> GatehouseResult<()> {
            Err(GatehouseError::NavigationFailed {
                destination: destination.to_string(),
                reason: "router unmounted".to_string(),
            })
        }
    }

    fn snapshot_with(granted: Vec<Capability>) -> ActorSnapshot {
        ActorSnapshot::signed_in(vec![Membership::new(
            OrgId("org_acme".to_string()),
            Arc::new(FixedEntitlements { granted }),
        )])
    }

    // ── 1. granted transparency ───────────────────────────────────────────────

    /// On Granted the children come back as the exact value passed in.
    #[test]
    fn granted_children_render_verbatim() {
        let snapshot = snapshot_with(vec![Capability::AiAnalysisUse]);
        let guard = AccessGuard::new(Capability::AiAnalysisUse);

        let rendered = guard.enforce(
            &snapshot,
            "<AnalysisPanel/>",
            Some("<Teaser/>"),
            &RecordingNavigator::new(),
        );

        assert_eq!(rendered, Rendered::Children("<AnalysisPanel/>"));
    }

    // ── 2. signed-out + hide ──────────────────────────────────────────────────

    /// A signed-out actor behind a hide guard sees nothing at all.
    #[test]
    fn signed_out_hide_renders_nothing() {
        let guard =
            AccessGuard::with_strategy(Capability::BillingManage, EnforcementStrategy::Hide);

        let rendered = guard.enforce(
            &ActorSnapshot::signed_out(),
            "<BillingSettings/>",
            Some("<Teaser/>"),
            &RecordingNavigator::new(),
        );

        // Hide wins even over a supplied fallback.
        assert_eq!(rendered, Rendered::Nothing);
    }

    // ── 3. upgrade prompt ─────────────────────────────────────────────────────

    /// A denied capability behind an upgrade-prompt guard renders the panel,
    /// whose single action points at the configured destination. No
    /// navigation happens until the user clicks.
    #[test]
    fn denied_upgrade_prompt_renders_panel() {
        let snapshot = snapshot_with(vec![]);
        let guard = AccessGuard::with_strategy(
            Capability::ExportUnlimited,
            EnforcementStrategy::upgrade_prompt("/pricing"),
        );
        let navigator = RecordingNavigator::new();
        let visited = navigator.visited.clone();

        let rendered = guard.enforce(&snapshot, "<ExportAll/>", None, &navigator);

        match rendered {
            Rendered::UpgradePanel(panel) => {
                assert_eq!(panel.destination, "/pricing");
                assert!(!panel.dismissable);
                assert!(!panel.action_label.is_empty());
            }
            other => panic!("expected UpgradePanel, got {:?}", other),
        }
        assert!(visited.lock().unwrap().is_empty(), "panel must not navigate by itself");
    }

    // ── 4. loading precedes every strategy ────────────────────────────────────

    /// While identity loads, every strategy shows the loading indicator.
    #[test]
    fn loading_shows_indicator_regardless_of_strategy() {
        let strategies = [
            EnforcementStrategy::Render,
            EnforcementStrategy::Hide,
            EnforcementStrategy::redirect_to("/login"),
            EnforcementStrategy::upgrade_prompt_default(),
        ];

        for strategy in strategies {
            let guard = AccessGuard::with_strategy(Capability::ReportsAdvanced, strategy);
            let navigator = RecordingNavigator::new();
            let rendered =
                guard.enforce(&ActorSnapshot::loading(), "<Reports/>", None, &navigator);

            assert_eq!(rendered, Rendered::Loading);
            assert!(navigator.visited.lock().unwrap().is_empty());
        }
    }

    // ── 5. no membership ──────────────────────────────────────────────────────

    /// A signed-in actor without an organization is denied any capability.
    #[test]
    fn no_membership_denies_any_capability() {
        let snapshot = ActorSnapshot::signed_in(vec![]);
        for cap in Capability::ALL {
            let guard = AccessGuard::with_strategy(*cap, EnforcementStrategy::Hide);
            let rendered =
                guard.enforce(&snapshot, "content", None, &RecordingNavigator::new());
            assert_eq!(rendered, Rendered::Nothing);
        }
    }

    // ── 6. redirect performs navigation ───────────────────────────────────────

    /// A denied redirect guard calls the navigator exactly once and renders
    /// nothing in place.
    #[test]
    fn denied_redirect_navigates_once() {
        let snapshot = snapshot_with(vec![]);
        let guard = AccessGuard::with_strategy(
            Capability::ApiAccess,
            EnforcementStrategy::redirect_to("/settings/plan"),
        );
        let navigator = RecordingNavigator::new();

        let rendered = guard.enforce(&snapshot, "<ApiKeys/>", None, &navigator);

        assert_eq!(rendered, Rendered::Nothing);
        assert_eq!(
            navigator.visited.lock().unwrap().as_slice(),
            &["/settings/plan".to_string()]
        );
    }

    /// A failing navigator is absorbed: nothing rendered, no panic.
    #[test]
    fn failed_navigation_is_absorbed() {
        let snapshot = snapshot_with(vec![]);
        let guard = AccessGuard::with_strategy(
            Capability::ApiAccess,
            EnforcementStrategy::redirect_to("/settings/plan"),
        );

        let rendered = guard.enforce(&snapshot, "<ApiKeys/>", None, &FailingNavigator);
        assert_eq!(rendered, Rendered::Nothing);
    }

    // ── 7. strategy exhaustiveness on Denied ──────────────────────────────────

    /// For a denied verdict, exactly one of {nothing, fallback, redirect,
    /// panel} is decided — never the children.
    #[test]
    fn denied_outcomes_are_exhaustive() {
        let cases: Vec<(EnforcementStrategy, Option<&str>)> = vec![
            (EnforcementStrategy::Render, None),
            (EnforcementStrategy::Render, Some("fallback")),
            (EnforcementStrategy::Hide, Some("fallback")),
            (EnforcementStrategy::redirect_to("/login"), Some("fallback")),
            (EnforcementStrategy::upgrade_prompt_default(), Some("fallback")),
        ];

        for (strategy, fallback) in cases {
            let outcome = decide_outcome(Verdict::Denied, &strategy, "children", fallback);
            match (&strategy, &outcome) {
                (EnforcementStrategy::Render, Outcome::RenderNothing) => assert!(fallback.is_none()),
                (EnforcementStrategy::Render, Outcome::RenderFallback(node)) => {
                    assert_eq!(*node, "fallback")
                }
                (EnforcementStrategy::Hide, Outcome::RenderNothing) => {}
                (EnforcementStrategy::RedirectTo { destination }, Outcome::Redirect { destination: decided }) => {
                    assert_eq!(destination, decided)
                }
                (EnforcementStrategy::UpgradePrompt { .. }, Outcome::ShowUpgradePanel(_)) => {}
                (strategy, outcome) => {
                    panic!("strategy {:?} produced unexpected outcome {:?}", strategy, outcome)
                }
            }
        }
    }

    // ── 8. guard/query consistency ────────────────────────────────────────────

    /// The guard renders children exactly when the read-only query reports
    /// Granted for the same snapshot and capability.
    #[test]
    fn guard_and_query_agree() {
        let snapshots = [
            ActorSnapshot::loading(),
            ActorSnapshot::signed_out(),
            ActorSnapshot::signed_in(vec![]),
            snapshot_with(vec![Capability::DealsUnlimited]),
        ];

        for snapshot in &snapshots {
            let query = access_query(snapshot, Capability::DealsUnlimited);
            let guard = AccessGuard::new(Capability::DealsUnlimited);
            let rendered = guard.enforce(snapshot, "children", None, &RecordingNavigator::new());

            let guard_granted = matches!(rendered, Rendered::Children(_));
            assert_eq!(
                guard_granted,
                query.verdict.is_granted(),
                "guard and query disagree for snapshot {:?}",
                snapshot
            );
            assert_eq!(query.verdict, resolve(snapshot, Capability::DealsUnlimited));
        }
    }

    // ── 9. default strategy ───────────────────────────────────────────────────

    /// With no explicit strategy, a denied guard renders the fallback when
    /// one is supplied, otherwise nothing.
    #[test]
    fn default_strategy_is_fallback_or_nothing() {
        let snapshot = snapshot_with(vec![]);
        let guard = AccessGuard::new(Capability::SeatsUnlimited);

        let with_fallback = guard.enforce(
            &snapshot,
            "<InviteForm/>",
            Some("<SeatLimitNote/>"),
            &RecordingNavigator::new(),
        );
        assert_eq!(with_fallback, Rendered::Fallback("<SeatLimitNote/>"));

        let without = guard.enforce(
            &snapshot,
            "<InviteForm/>",
            None,
            &RecordingNavigator::new(),
        );
        assert_eq!(without, Rendered::Nothing);
    }

    // ── 10. plan catalog end to end ───────────────────────────────────────────

    /// A TOML plan catalog drives a guard the same way a mock does.
    #[test]
    fn plan_catalog_drives_the_guard() {
        let toml = r#"
            [[plans]]
            id = "scale"
            description = "Top tier"
            capabilities = ["org:ai_analysis:use", "org:export:unlimited"]

            [[plans]]
            id = "starter"
            description = "Entry tier"
            capabilities = []
        "#;

        let catalog = gatehouse_plans::PlanCatalog::from_toml_str(toml).unwrap();

        let scale = ActorSnapshot::signed_in(vec![Membership::new(
            OrgId("org_scale".to_string()),
            Arc::new(catalog.entitlements_for("scale").unwrap()),
        )]);
        let starter = ActorSnapshot::signed_in(vec![Membership::new(
            OrgId("org_starter".to_string()),
            Arc::new(catalog.entitlements_for("starter").unwrap()),
        )]);

        let guard = AccessGuard::with_strategy(
            Capability::AiAnalysisUse,
            EnforcementStrategy::upgrade_prompt_default(),
        );

        let on_scale = guard.enforce(&scale, "<Analysis/>", None, &RecordingNavigator::new());
        assert_eq!(on_scale, Rendered::Children("<Analysis/>"));

        let on_starter = guard.enforce(&starter, "<Analysis/>", None, &RecordingNavigator::new());
        assert!(matches!(on_starter, Rendered::UpgradePanel(_)));
    }
}
