//! Stagelink - live-session bridge diagnostics.
//!
//! Main entry point for the Stagelink CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{Context, classify, config, open, unresolve};

/// Default project-local config filename.
const PROJECT_CONFIG_FILE: &str = "stagelink.toml";

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Stagelink - bridge between a local session and a live-editing server
#[derive(Parser)]
#[command(name = "stagelink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file path (default: ./stagelink.toml)
    #[arg(long, global = true, env = "STAGELINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Workspace root, overriding the config file
    #[arg(long, global = true, env = "STAGELINK_WORKSPACE_PATH")]
    pub workspace: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide whether a path is live-addressable or local
    Classify(classify::ClassifyArgs),

    /// Rewrite a live-addressable path into its canonical session form
    Unresolve(unresolve::UnresolveArgs),

    /// Open a live-addressable path and bring a session up
    Open(open::OpenArgs),

    /// Show the effective bridge configuration
    Config(config::ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "stagelink=debug,stagelink_config=debug,stagelink_live=debug,stagelink_resolver=debug,info"
    } else {
        "stagelink=info,warn"
    };
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    let loaded = stagelink_config::load_config(&config_path)?;

    let ctx = Context {
        workspace_root: cli
            .workspace
            .or(loaded.workspace_path)
            .unwrap_or_default(),
        settings: loaded.live,
        json_output: cli.json,
    };

    match cli.command {
        Commands::Classify(args) => classify::run(args, &ctx),
        Commands::Unresolve(args) => unresolve::run(args, &ctx),
        Commands::Open(args) => open::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx),
    }
}
