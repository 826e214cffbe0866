//! Gatehouse demo CLI
//!
//! Runs one or all of the canonical access-control scenarios. Each scenario
//! uses real gatehouse components (session feed, plan catalog, resolver,
//! access guard) wired together with the demo plan file.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- signed-out
//!   cargo run -p demo -- granted
//!   cargo run -p demo -- upgrade-prompt
//!   cargo run -p demo -- loading
//!   cargo run -p demo -- no-membership

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gatehouse_contracts::{error::GatehouseResult, Capability, OrgId};
use gatehouse_core::{
    access_query,
    snapshot::{ActorSnapshot, Membership},
    traits::{IdentityProvider, Navigator},
    SessionFeed,
};
use gatehouse_guard::{AccessGuard, EnforcementStrategy, Rendered};
use gatehouse_plans::PlanCatalog;

// ── Plan file ─────────────────────────────────────────────────────────────────

const SAAS_PLANS: &str = include_str!("../plans/saas.toml");

// ── CLI definition ────────────────────────────────────────────────────────────

/// Gatehouse — capability-based access control demo.
///
/// Each subcommand drives one access scenario through the session feed,
/// permission resolver, and access guard, printing what a call site would
/// render.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Gatehouse access-control demo",
    long_about = "Runs gatehouse access scenarios showing default-deny resolution,\n\
                  enforcement strategies, and the read-only access query."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every scenario in sequence.
    RunAll,
    /// Signed-out actor behind a hide guard: renders nothing.
    SignedOut,
    /// Scale-plan actor using AI analysis: children render.
    Granted,
    /// Starter-plan actor hitting unlimited export: upgrade panel.
    UpgradePrompt,
    /// Identity still loading: loading indicator for every strategy.
    Loading,
    /// Signed-in actor with no organization: denied everything.
    NoMembership,
}

// ── Navigation collaborator ───────────────────────────────────────────────────

/// A navigator that prints where the router would go.
struct PrintingNavigator;

impl Navigator for PrintingNavigator {
    fn navigate(&self, destination: &str) -> GatehouseResult<()> {
        println!("    → router navigates to {destination}");
        Ok(())
    }
}

// ── Scenario helpers ──────────────────────────────────────────────────────────

fn describe<C: std::fmt::Display>(rendered: &Rendered<C>) -> String {
    match rendered {
        Rendered::Children(c) => format!("children rendered: {c}"),
        Rendered::Loading => "loading indicator".to_string(),
        Rendered::Nothing => "nothing rendered".to_string(),
        Rendered::Fallback(c) => format!("fallback rendered: {c}"),
        Rendered::UpgradePanel(panel) => format!(
            "upgrade panel: \"{}\" [{} → {}]",
            panel.headline, panel.action_label, panel.destination
        ),
    }
}

fn member_on_plan(catalog: &PlanCatalog, org: &str, plan: &str) -> GatehouseResult<Membership> {
    Ok(Membership::new(
        OrgId(org.to_string()),
        Arc::new(catalog.entitlements_for(plan)?),
    ))
}

fn scenario_signed_out() {
    println!("── signed-out actor, billing settings behind hide ──");
    let feed = SessionFeed::new();
    feed.publish(ActorSnapshot::signed_out()).expect("fresh feed accepts snapshots");

    let guard = AccessGuard::with_strategy(Capability::BillingManage, EnforcementStrategy::Hide);
    let rendered = guard.enforce(
        &feed.snapshot(),
        "<BillingSettings/>",
        Some("<SignInNote/>"),
        &PrintingNavigator,
    );
    println!("    {}", describe(&rendered));
}

fn scenario_granted(catalog: &PlanCatalog) -> GatehouseResult<()> {
    println!("── scale-plan actor, AI analysis ──");
    let feed = SessionFeed::new();
    feed.publish(ActorSnapshot::signed_in(vec![member_on_plan(
        catalog, "org_acme", "scale",
    )?]))?;

    let guard = AccessGuard::new(Capability::AiAnalysisUse);
    let rendered = guard.enforce(&feed.snapshot(), "<AnalysisPanel/>", None, &PrintingNavigator);
    println!("    {}", describe(&rendered));

    // The read-only query drives non-presentational call sites.
    let query = access_query(&feed.snapshot(), Capability::ReportsAdvanced);
    println!("    query org:reports:advanced → {:?}", query.verdict);
    Ok(())
}

fn scenario_upgrade_prompt(catalog: &PlanCatalog) -> GatehouseResult<()> {
    println!("── starter-plan actor, unlimited export behind upgrade prompt ──");
    let feed = SessionFeed::new();
    feed.publish(ActorSnapshot::signed_in(vec![member_on_plan(
        catalog,
        "org_smallco",
        "starter",
    )?]))?;

    let guard = AccessGuard::with_strategy(
        Capability::ExportUnlimited,
        EnforcementStrategy::upgrade_prompt("/pricing"),
    );
    let rendered = guard.enforce(&feed.snapshot(), "<ExportAll/>", None, &PrintingNavigator);
    println!("    {}", describe(&rendered));
    Ok(())
}

fn scenario_loading() {
    println!("── identity still loading ──");
    let feed = SessionFeed::new();

    for strategy in [
        EnforcementStrategy::Render,
        EnforcementStrategy::Hide,
        EnforcementStrategy::redirect_to("/login"),
        EnforcementStrategy::upgrade_prompt_default(),
    ] {
        let guard = AccessGuard::with_strategy(Capability::DealsUnlimited, strategy.clone());
        let rendered = guard.enforce(&feed.snapshot(), "<DealBoard/>", None, &PrintingNavigator);
        println!("    {:?} → {}", strategy, describe(&rendered));
    }
}

fn scenario_no_membership() {
    println!("── signed-in actor with no organization, redirect strategy ──");
    let feed = SessionFeed::new();
    feed.publish(ActorSnapshot::signed_in(vec![]))
        .expect("fresh feed accepts snapshots");

    let guard = AccessGuard::with_strategy(
        Capability::ApiAccess,
        EnforcementStrategy::redirect_to("/onboarding/create-org"),
    );
    let rendered = guard.enforce(&feed.snapshot(), "<ApiKeys/>", None, &PrintingNavigator);
    println!("    {}", describe(&rendered));
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let catalog = match PlanCatalog::from_toml_str(SAAS_PLANS) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("failed to load demo plans: {e}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    let result: GatehouseResult<()> = match cli.command {
        Command::RunAll => {
            scenario_signed_out();
            scenario_granted(&catalog)
                .and_then(|_| scenario_upgrade_prompt(&catalog))
                .map(|_| {
                    scenario_loading();
                    scenario_no_membership();
                })
        }
        Command::SignedOut => {
            scenario_signed_out();
            Ok(())
        }
        Command::Granted => scenario_granted(&catalog),
        Command::UpgradePrompt => scenario_upgrade_prompt(&catalog),
        Command::Loading => {
            scenario_loading();
            Ok(())
        }
        Command::NoMembership => {
            scenario_no_membership();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("scenario failed: {e}");
        std::process::exit(1);
    }
}
