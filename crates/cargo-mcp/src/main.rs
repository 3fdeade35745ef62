use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use cargo_mcp_core::ToolRegistry;
use cargo_mcp_tools::{cargo_executable, register_cargo_tools};

mod server;

use server::McpServer;

#[derive(Parser, Debug, Clone)]
#[command(name = "cargo-mcp")]
#[command(about = "MCP server exposing Cargo operations over stdio")]
#[command(version)]
struct Cli {
    /// Project directory used when a tool call does not name its own
    /// working_directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol stream, so logging goes to stderr.
    if cli.log_level.is_some() {
        // If RUST_LOG is set, use it
        env_logger::init();
    } else {
        let filter = if cli.debug { "debug" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
    }

    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("project root {} is not accessible", cli.root.display()))?;

    let registry = Arc::new(ToolRegistry::new());
    register_cargo_tools(&registry, &root).context("failed to register cargo tools")?;

    log::info!("Starting cargo-mcp for project {}", root.display());
    log::info!("Cargo binary: {}", cargo_executable().display());
    log::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server
        .serve(tokio::io::stdin(), tokio::io::stdout())
        .await?;

    Ok(())
}
