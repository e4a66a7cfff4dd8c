use sl_config::{Config, Transport};
use sl_devops::{StoryCreator, WorkItemCreator};
use sl_mcp::McpProtocolHandler;
use sl_server::{Cli, Frontend, logger, resolve_frontend, run_interactive};

use std::error::Error;
use std::io::IsTerminal;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // .env is optional; real environment variables win over it
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting storyline v{}", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {e}"),
    }
    config.log_summary();

    let frontend = resolve_frontend(&cli, &config.frontend, std::io::stdin().is_terminal());
    info!("Front-end: {frontend}");

    let creator: Arc<dyn StoryCreator> =
        Arc::new(WorkItemCreator::new(Arc::new(config.azure.clone()))?);

    match frontend {
        Frontend::Interactive => run_interactive(creator.as_ref()).await?,
        Frontend::JsonRpc(Transport::Stdio) => {
            let handler = McpProtocolHandler::new(creator);
            sl_mcp::serve_stdio(&handler).await?;
        }
        Frontend::JsonRpc(Transport::Http) => {
            let handler = Arc::new(McpProtocolHandler::new(creator));
            sl_mcp::serve_http(handler, &config.http.bind_addr()).await?;
        }
    }

    info!("storyline stopped");
    Ok(())
}
