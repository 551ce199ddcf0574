// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! sentineld - Sentinel incident-response dispatcher

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sentinel_agent::{AgentRuntime, Orchestrator, OpenAiAgentRuntime};
use sentinel_core::{IncidentCard, SentinelSettings};
use sentinel_dispatcher::Dispatcher;
use sentinel_prompts::PromptRepository;
use sentinel_registry::ToolRegistry;
use sentinel_sinks::SinkDispatcher;
use sentinel_watcher::Watcher;
use tracing::info;

#[derive(Parser)]
#[command(name = "sentineld", version, about = "Bridges Prometheus-style alerts to LLM-driven remediation agents")]
struct Cli {
    /// Path to the sentinel configuration file.
    #[arg(long = "config", global = true, default_value = "config.yaml")]
    config: PathBuf,

    /// Base log level for Sentinel output.
    #[arg(long = "log-level", global = true, default_value = "INFO")]
    log_level: String,

    /// Enable verbose debug logging regardless of --log-level.
    #[arg(long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the watcher -> dispatcher -> agent orchestrator loop.
    Run,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _log_guard = setup_logging(&cli.log_level, cli.debug);

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn setup_logging(log_level: &str, debug: bool) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let directive = if debug { "debug" } else { log_level };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    guard
}

async fn run(cli: &Cli) -> Result<()> {
    let Commands::Run = cli.command;

    let settings = sentinel_config::load_settings(Some(&cli.config))
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    let agent_runtime = build_agent_runtime();
    let orchestrator = Arc::new(build_orchestrator(&settings, agent_runtime));

    let cards: Vec<Arc<IncidentCard>> = settings
        .incident_cards
        .iter()
        .cloned()
        .map(Arc::new)
        .collect();
    let dispatcher = Arc::new(Dispatcher::new(cards, &settings.dispatcher, orchestrator));
    dispatcher.start();

    let watchers: Vec<Arc<Watcher>> = settings
        .watchers
        .iter()
        .cloned()
        .map(|config| Arc::new(Watcher::new(config, &settings.resources, dispatcher.clone())))
        .collect();
    for watcher in &watchers {
        watcher.start();
    }

    info!(
        watchers = watchers.len(),
        cards = settings.incident_cards.len(),
        "sentinel running; awaiting watcher notifications"
    );

    tokio::signal::ctrl_c()
        .await
        .context("failed to install CTRL-C handler")?;
    info!("shutdown signal received; stopping watchers and dispatcher");

    for watcher in &watchers {
        watcher.stop().await;
    }
    dispatcher.join().await;
    dispatcher.stop().await;

    Ok(())
}

fn build_orchestrator(settings: &SentinelSettings, agent_runtime: Arc<dyn AgentRuntime>) -> Orchestrator {
    let registry = Arc::new(ToolRegistry::new(settings.tool_servers.clone()));
    let sinks = Arc::new(SinkDispatcher::from_settings(settings));
    Orchestrator::new(
        registry,
        PromptRepository::cwd(),
        sinks,
        agent_runtime,
        settings.openai.model.clone(),
    )
}

fn build_agent_runtime() -> Arc<dyn AgentRuntime> {
    match std::env::var("OPENAI_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            Arc::new(OpenAiAgentRuntime::new(&api_key)) as Arc<dyn AgentRuntime>
        }
        _ => {
            tracing::warn!(
                "OPENAI_API_KEY is not set; agent runs will fail at the remote API call until it is configured"
            );
            Arc::new(OpenAiAgentRuntime::new("")) as Arc<dyn AgentRuntime>
        }
    }
}
