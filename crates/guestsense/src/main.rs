mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use guestsense_core::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ServiceConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            commands::serve::run(config).await
        }
        Commands::Synthesize { file, model } => {
            if let Some(model) = model {
                config.model = model;
            }
            commands::synthesize::run(&file, &config).await
        }
        Commands::Version => commands::version::run(),
    }
}
