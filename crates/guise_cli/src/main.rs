//! Guise CLI
//!
//! Applies (or periodically re-applies) the configured day/night appearance
//! through the desktop's settings store. The in-shell filter components are
//! library-only; this binary drives the appearance scheduler.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::GuiseConfig;
use guise_core::clock::SystemClock;
use guise_settings::{GSettingsStore, MemoryStore};
use guise_theme::{AppearanceProfile, AppearanceScheduler, DayNightBoundary};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guise", version, about = "Day/night desktop appearance switcher")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "guise.toml")]
    config: PathBuf,

    /// Log the intended writes instead of touching the desktop
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the appearance for the current time once
    Apply,
    /// Keep re-applying on a repeating cadence
    Watch {
        /// Seconds between applications (overrides the config file)
        #[arg(long)]
        interval: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = GuiseConfig::load_or_default(&cli.config)?;
    let boundary = config.boundary()?;
    let profile = config.profile();

    match cli.command {
        Commands::Apply => {
            apply_once(boundary, profile, cli.dry_run);
            Ok(())
        }
        Commands::Watch { interval } => {
            let period = Duration::from_secs(interval.unwrap_or(config.watch.interval_secs));
            watch(boundary, profile, cli.dry_run, period)
        }
    }
}

fn apply_once(boundary: DayNightBoundary, profile: AppearanceProfile, dry_run: bool) {
    if dry_run {
        let store = MemoryStore::new();
        let scheduler = AppearanceScheduler::new(boundary, profile, &store, SystemClock::new());
        scheduler.apply();
        report_dry_run(&store);
    } else {
        let scheduler = AppearanceScheduler::new(
            boundary,
            profile,
            GSettingsStore::new(),
            SystemClock::new(),
        );
        scheduler.apply();
    }
}

fn watch(
    boundary: DayNightBoundary,
    profile: AppearanceProfile,
    dry_run: bool,
    period: Duration,
) -> Result<()> {
    tracing::info!(period_secs = period.as_secs(), dry_run, "watching");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(watch_loop(boundary, profile, dry_run, period))
}

async fn watch_loop(
    boundary: DayNightBoundary,
    profile: AppearanceProfile,
    dry_run: bool,
    period: Duration,
) -> Result<()> {
    let mut interval = tokio::time::interval(period);
    loop {
        // The first tick fires immediately, so the appearance is applied on
        // startup and then once per period.
        interval.tick().await;
        apply_once(boundary, profile.clone(), dry_run);
    }
}

fn report_dry_run(store: &MemoryStore) {
    for ((schema, key), value) in store.entries() {
        tracing::info!(%schema, %key, %value, "would write");
    }
}
