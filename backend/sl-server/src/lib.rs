pub mod cli;
pub mod command;
pub mod console;
pub mod error;
pub mod logger;
pub mod mode;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use command::ConsoleCommand;
pub use console::{Console, USAGE, run_interactive};
pub use error::{Result as ServerResult, ServerError};
pub use mode::{Frontend, resolve_frontend};
