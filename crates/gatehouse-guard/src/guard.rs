//! The access guard: verdict-driven enforcement at one call site.
//!
//! An `AccessGuard` names the one capability its call site requires and the
//! strategy to apply on denial. `evaluate()` is the pure half (resolve +
//! decide); `enforce()` additionally executes the redirect effect through
//! the `Navigator`. Children are rendered only on `Granted` for the exact
//! configured capability — there is no bypass and no inheritance.

use tracing::{debug, warn};

use gatehouse_contracts::Capability;
use gatehouse_core::{resolve, snapshot::ActorSnapshot, traits::Navigator};

use crate::outcome::{decide_outcome, EnforcementStrategy, Outcome, UpgradePanel};

/// What the call site ends up showing after effects ran.
///
/// `Outcome` minus the deferred redirect: by the time a `Rendered` exists,
/// navigation (if any) has already been requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<C> {
    /// The guarded children, exactly as passed in.
    Children(C),
    /// A neutral loading indicator.
    Loading,
    /// Nothing at all (hidden, redirected away, or no fallback).
    Nothing,
    /// The caller-supplied fallback.
    Fallback(C),
    /// The upgrade panel.
    UpgradePanel(UpgradePanel),
}

/// One guarded call site: a capability plus an enforcement strategy.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    capability: Capability,
    strategy: EnforcementStrategy,
}

impl AccessGuard {
    /// Guard on `capability` with the default strategy
    /// (fallback-or-nothing on deny).
    pub fn new(capability: Capability) -> Self {
        Self { capability, strategy: EnforcementStrategy::default() }
    }

    /// Guard on `capability` with an explicit strategy.
    pub fn with_strategy(capability: Capability, strategy: EnforcementStrategy) -> Self {
        Self { capability, strategy }
    }

    /// The capability this call site requires.
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// The strategy applied on denial.
    pub fn strategy(&self) -> &EnforcementStrategy {
        &self.strategy
    }

    /// Resolve the capability against `snapshot` and decide the outcome.
    ///
    /// Pure: no navigation happens here. Call once per snapshot change.
    pub fn evaluate<C>(
        &self,
        snapshot: &ActorSnapshot,
        children: C,
        fallback: Option<C>,
    ) -> Outcome<C> {
        let verdict = resolve(snapshot, self.capability);
        debug!(
            capability = %self.capability,
            verdict = ?verdict,
            "guard evaluated"
        );
        decide_outcome(verdict, &self.strategy, children, fallback)
    }

    /// Evaluate, then execute the redirect effect if the outcome calls for
    /// one, and return what the call site should show.
    ///
    /// A navigation failure is absorbed with a warning and renders nothing;
    /// an access check must never crash the page.
    pub fn enforce<C>(
        &self,
        snapshot: &ActorSnapshot,
        children: C,
        fallback: Option<C>,
        navigator: &dyn Navigator,
    ) -> Rendered<C> {
        perform(self.evaluate(snapshot, children, fallback), navigator)
    }
}

/// Execute an outcome's effect (if any) and map it to a `Rendered`.
///
/// Only `Redirect` has an effect. Everything else maps 1:1.
pub fn perform<C>(outcome: Outcome<C>, navigator: &dyn Navigator) -> Rendered<C> {
    match outcome {
        Outcome::RenderChildren(children) => Rendered::Children(children),
        Outcome::ShowLoading => Rendered::Loading,
        Outcome::RenderNothing => Rendered::Nothing,
        Outcome::RenderFallback(node) => Rendered::Fallback(node),
        Outcome::ShowUpgradePanel(panel) => Rendered::UpgradePanel(panel),
        Outcome::Redirect { destination } => {
            if let Err(e) = navigator.navigate(&destination) {
                warn!(
                    destination = %destination,
                    error = %e,
                    "redirect failed, rendering nothing"
                );
            }
            Rendered::Nothing
        }
    }
}
