use sl_config::{RunMode, Transport};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(about = "Create Azure DevOps user stories from a console or an MCP client")]
#[command(version)]
pub struct Cli {
    /// Front-end to run: auto, interactive or jsonrpc (overrides STORYLINE_MODE and config)
    #[arg(long)]
    pub mode: Option<RunMode>,

    /// JSON-RPC transport: stdio or http (overrides STORYLINE_TRANSPORT and config)
    #[arg(long)]
    pub transport: Option<Transport>,
}
