//! Mowa - Entry Point
//!
//! Local HTTP server for sending chat messages, reporting uptime and storing
//! files under a confined directory.

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use mowa::Server;
use mowa::config::ServerConfig;
use mowa::error::ServerError;

#[derive(Parser, Debug)]
#[command(name = "mowa", version, about = "Local messaging, uptime and storage API")]
struct Args {
    /// Path to configuration file (optional)
    #[arg(long, env = "MOWA_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // RUST_LOG overrides the default filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    info!("Launching Mowa server...");

    if let Err(e) = run(args).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ServerError> {
    let config = ServerConfig::load(args.config.as_deref())?;
    let server = Server::new(config).await?;
    server.start().await
}
