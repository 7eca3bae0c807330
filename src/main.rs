//! Seerdeck - Static Dashboard Renderer for the MemeSeer Agent
//!
//! Polls the agent memory snapshot and outbox posts and renders them into a
//! static HTML dashboard.

mod adapters;
mod application;
mod config;
mod domain;
mod ports;
mod view;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::adapters::cli::{CliApp, Command, IndexCmd, RenderCmd, RunCmd, StatusCmd};
use crate::adapters::fs::{FsFeed, OUTBOX_DIR};
use crate::adapters::http::{HttpFeed, HttpFeedConfig};
use crate::application::{build_index, DashboardOrchestrator, TickOutcome};
use crate::config::{load_config, Config};
use crate::domain::{format, Snapshot};
use crate::ports::feed::{OutboxFeed, SnapshotFeed};
use crate::view::overview::OverviewOptions;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (deployment overrides go here)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug)?;

    match app.command {
        Command::Run(cmd) => run_command(cmd).await,
        Command::Render(cmd) => render_command(cmd).await,
        Command::Index(cmd) => index_command(cmd),
        Command::Status(cmd) => status_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
    Ok(())
}

async fn run_command(cmd: RunCmd) -> Result<()> {
    tracing::info!("Starting seerdeck...");

    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    let interval = Duration::from_secs(cmd.interval.unwrap_or(config.poll.interval_secs));
    let output = PathBuf::from(&config.render.output);

    match config.sources.mode.as_str() {
        "http" => {
            let feed = http_feed(&config)?;
            run_loop(build_orchestrator(feed.clone(), feed, output, &config, interval)).await
        }
        _ => {
            let feed = FsFeed::new(config.data_dir());
            run_loop(build_orchestrator(feed.clone(), feed, output, &config, interval)).await
        }
    }
}

async fn render_command(cmd: RenderCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    let output = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(&config.render.output));
    let interval = Duration::from_secs(config.poll.interval_secs);

    let outcome = match config.sources.mode.as_str() {
        "http" => {
            let feed = http_feed(&config)?;
            build_orchestrator(feed.clone(), feed, output.clone(), &config, interval)
                .tick()
                .await?
        }
        _ => {
            let feed = FsFeed::new(config.data_dir());
            build_orchestrator(feed.clone(), feed, output.clone(), &config, interval)
                .tick()
                .await?
        }
    };

    match outcome {
        TickOutcome::Rendered => println!("Rendered {}", output.display()),
        TickOutcome::Offline => println!("Snapshot unreachable; wrote offline page to {}", output.display()),
    }
    Ok(())
}

fn index_command(cmd: IndexCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    if config.sources.mode != "fs" {
        bail!("The index command needs filesystem access; set sources.mode = \"fs\"");
    }

    let outbox = Path::new(&config.data_dir()).join(OUTBOX_DIR);
    let summary = build_index(&outbox, cmd.max_posts)
        .with_context(|| format!("Failed to index {}", outbox.display()))?;

    println!(
        "Indexed {} of {} posts in {}",
        summary.posts.len(),
        summary.scanned,
        outbox.display()
    );
    Ok(())
}

async fn status_command(cmd: StatusCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;

    let root = match config.sources.mode.as_str() {
        "http" => http_feed(&config)?.fetch_snapshot().await,
        _ => FsFeed::new(config.data_dir()).fetch_snapshot().await,
    }
    .context("Failed to fetch snapshot")?;

    let snapshot = Snapshot::new(root);
    let world = snapshot.world();
    let economy = snapshot.economy();

    println!("Mood:      {} ({})", world.mood, world.bucket);
    println!("Edge:      {}", format::edge(world.edge));
    println!(
        "Balances:  SEER {} | MON {} | burned {}",
        format::amount(economy.seer),
        format::amount(economy.mon),
        format::amount(economy.seer_burned)
    );
    println!("Positions: {}", snapshot.positions().len());
    println!("Launches:  {}", snapshot.launches().len());

    match snapshot.latest_run() {
        Some(run) => println!(
            "Last run:  {} - launch={} ({})",
            format::unix_date(run.ts),
            run.launch,
            run.reason
        ),
        None => println!("Last run:  -"),
    }
    Ok(())
}

fn http_feed(config: &Config) -> Result<HttpFeed> {
    HttpFeed::with_config(HttpFeedConfig {
        base_url: config.sources.base_url.clone(),
        timeout: Duration::from_secs(config.sources.timeout_secs),
    })
    .context("Failed to create HTTP feed")
}

fn build_orchestrator<S: SnapshotFeed, O: OutboxFeed>(
    snapshot_feed: S,
    outbox_feed: O,
    output: PathBuf,
    config: &Config,
    interval: Duration,
) -> DashboardOrchestrator<S, O> {
    DashboardOrchestrator::new(snapshot_feed, outbox_feed, output)
        .with_poll_interval(interval)
        .with_max_posts(config.render.max_posts)
        .with_overview_options(OverviewOptions {
            outbox_base: config.render.outbox_base.clone(),
            max_positions: config.render.max_positions,
        })
}

async fn run_loop<S, O>(orchestrator: DashboardOrchestrator<S, O>) -> Result<()>
where
    S: SnapshotFeed + 'static,
    O: OutboxFeed + 'static,
{
    // Setup Ctrl+C handler
    let orch = orchestrator.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown signal received");
        orch.stop().await;
    });

    orchestrator.run().await?;
    tracing::info!("Seerdeck stopped");
    Ok(())
}
