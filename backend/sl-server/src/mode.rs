use crate::Cli;

use sl_config::{FrontendConfig, RunMode, Transport};

use std::fmt;

/// The front-end picked at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Interactive,
    JsonRpc(Transport),
}

impl fmt::Display for Frontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frontend::Interactive => f.write_str("interactive console"),
            Frontend::JsonRpc(transport) => write!(f, "JSON-RPC over {transport}"),
        }
    }
}

/// Resolve the front-end once.
///
/// `frontend` already carries env overrides on top of the config file, so
/// the flags only need to win over it. `stdin_is_terminal` is consulted
/// only for [`RunMode::Auto`].
pub fn resolve_frontend(cli: &Cli, frontend: &FrontendConfig, stdin_is_terminal: bool) -> Frontend {
    let mode = cli.mode.unwrap_or(frontend.mode);
    let transport = cli.transport.unwrap_or(frontend.transport);

    match mode {
        RunMode::Interactive => Frontend::Interactive,
        RunMode::JsonRpc => Frontend::JsonRpc(transport),
        RunMode::Auto if stdin_is_terminal => Frontend::Interactive,
        RunMode::Auto => Frontend::JsonRpc(transport),
    }
}
