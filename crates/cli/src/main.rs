//! FloodSense CLI
//!
//! Main entry point for the floodsense command-line tool.
//! Answers questions about flood risk in South Sudan.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, ModelCommand, RegionsCommand};
use floodsense_core::{config::AppConfig, logging, AppResult};
use floodsense_engine::ResponseEngine;
use floodsense_llm::ModelAdapter;
use floodsense_prompt::{load_or_default, DEFAULT_TEMPLATE_ID};
use std::path::PathBuf;
use std::sync::Arc;

/// FloodSense - flood risk answers for South Sudan
#[derive(Parser, Debug)]
#[command(name = "floodsense")]
#[command(about = "Flood risk answers for South Sudan", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "FLOODSENSE_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Fine-tuned model artifact directory
    #[arg(long, global = true, env = "FLOODSENSE_MODEL_DIR")]
    model_dir: Option<PathBuf>,

    /// Generation runtime endpoint
    #[arg(long, global = true, env = "FLOODSENSE_ENDPOINT")]
    endpoint: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question
    Ask(AskCommand),

    /// Interactive question loop on stdin
    Chat(ChatCommand),

    /// List the per-settlement flood figures
    Regions(RegionsCommand),

    /// Load the model and report which one is in use
    Model(ModelCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?.with_overrides(
        cli.workspace,
        cli.model_dir,
        cli.endpoint,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color, config.log_json)?;
    config.validate()?;

    tracing::info!("FloodSense starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Model directory: {:?}", config.resolved_model_dir());

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
        Commands::Regions(_) => "regions",
        Commands::Model(_) => "model",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&build_engine(&config)?).await,
        Commands::Chat(cmd) => cmd.execute(&build_engine(&config)?).await,
        Commands::Regions(cmd) => cmd.execute(),
        Commands::Model(cmd) => cmd.execute(&build_engine(&config)?).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}

/// Wire the adapter and engine from configuration.
fn build_engine(config: &AppConfig) -> AppResult<ResponseEngine> {
    let template = load_or_default(&config.workspace, DEFAULT_TEMPLATE_ID)?;
    let adapter = ModelAdapter::from_config(config).with_template(template);
    Ok(ResponseEngine::with_adapter(Arc::new(adapter)))
}
