//! Enforcement strategies and the pure outcome decision.
//!
//! The guard splits enforcement into two steps: `decide_outcome()` maps a
//! verdict plus the call site's strategy to an `Outcome` with no side
//! effects, and `perform()` (in `guard.rs`) executes the one outcome that
//! needs a collaborator (redirect). Keeping the decision pure makes every
//! branch unit-testable without a UI framework or a router.

use serde::{Deserialize, Serialize};

use gatehouse_contracts::Verdict;

/// The conventional destination for "you need a bigger plan" flows, used
/// when a call site does not name its own.
pub const DEFAULT_UPGRADE_DESTINATION: &str = "/pricing";

/// What a call site wants done with a `Denied` verdict.
///
/// Chosen by the call site, never by this layer. `Granted` always renders
/// the children and `Pending` always shows the loading indicator; the
/// strategy is only consulted for `Denied`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnforcementStrategy {
    /// Render the caller-supplied fallback in place, or nothing if the call
    /// site provided none. The default.
    Render,

    /// Render nothing, even when a fallback was supplied.
    Hide,

    /// Navigate away to the given path; nothing is rendered here.
    RedirectTo { destination: String },

    /// Render a fixed explanatory panel whose single primary action
    /// navigates to the given path.
    UpgradePrompt { destination: String },
}

impl EnforcementStrategy {
    /// Strategy that redirects denied actors to `destination`.
    pub fn redirect_to(destination: impl Into<String>) -> Self {
        Self::RedirectTo { destination: destination.into() }
    }

    /// Strategy that shows an upgrade panel pointing at `destination`.
    pub fn upgrade_prompt(destination: impl Into<String>) -> Self {
        Self::UpgradePrompt { destination: destination.into() }
    }

    /// Upgrade panel pointing at [`DEFAULT_UPGRADE_DESTINATION`].
    pub fn upgrade_prompt_default() -> Self {
        Self::upgrade_prompt(DEFAULT_UPGRADE_DESTINATION)
    }
}

impl Default for EnforcementStrategy {
    fn default() -> Self {
        Self::Render
    }
}

/// The fixed explanatory panel shown by the upgrade-prompt strategy.
///
/// Non-dismissable by default: it replaces the guarded content rather than
/// overlaying it, and offers exactly one primary action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePanel {
    /// Short headline, e.g. "Upgrade to unlock this feature".
    pub headline: String,
    /// One-sentence explanation of why the content is unavailable.
    pub body: String,
    /// Label on the single primary action.
    pub action_label: String,
    /// Where the primary action navigates.
    pub destination: String,
    /// Whether the panel offers a dismiss affordance. Defaults to false.
    pub dismissable: bool,
}

impl UpgradePanel {
    /// The standard panel copy, pointed at `destination`.
    pub fn for_destination(destination: impl Into<String>) -> Self {
        Self {
            headline: "Upgrade to unlock this feature".to_string(),
            body: "Your current plan does not include this feature.".to_string(),
            action_label: "View plans".to_string(),
            destination: destination.into(),
            dismissable: false,
        }
    }
}

/// The decided result of one guard evaluation, before any effect runs.
///
/// Exactly one outcome is produced per evaluation. `Redirect` is the only
/// variant carrying a deferred side effect; everything else is plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<C> {
    /// Verdict was `Granted`: the children, untouched.
    RenderChildren(C),
    /// Verdict was `Pending`: show a neutral loading indicator.
    ShowLoading,
    /// Denied with `Hide`, or `Render` with no fallback: render nothing.
    RenderNothing,
    /// Denied with `Render` and a caller-supplied fallback.
    RenderFallback(C),
    /// Denied with `RedirectTo`: navigate away, render nothing here.
    Redirect { destination: String },
    /// Denied with `UpgradePrompt`: show the panel in place.
    ShowUpgradePanel(UpgradePanel),
}

/// Map a verdict and a call site's strategy to exactly one outcome.
///
/// Pure. `Pending` short-circuits before the strategy is consulted;
/// `Granted` returns `children` exactly as passed (no wrapping); `Denied`
/// produces one of nothing / fallback / redirect / panel per the strategy.
pub fn decide_outcome<C>(
    verdict: Verdict,
    strategy: &EnforcementStrategy,
    children: C,
    fallback: Option<C>,
) -> Outcome<C> {
    match verdict {
        Verdict::Pending => Outcome::ShowLoading,
        Verdict::Granted => Outcome::RenderChildren(children),
        Verdict::Denied => match strategy {
            EnforcementStrategy::Render => match fallback {
                Some(node) => Outcome::RenderFallback(node),
                None => Outcome::RenderNothing,
            },
            EnforcementStrategy::Hide => Outcome::RenderNothing,
            EnforcementStrategy::RedirectTo { destination } => Outcome::Redirect {
                destination: destination.clone(),
            },
            EnforcementStrategy::UpgradePrompt { destination } => {
                Outcome::ShowUpgradePanel(UpgradePanel::for_destination(destination.clone()))
            }
        },
    }
}
