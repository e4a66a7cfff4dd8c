use crate::{Cli, Frontend, resolve_frontend};

use sl_config::{FrontendConfig, RunMode, Transport};

use clap::Parser;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("storyline").chain(args.iter().copied())).unwrap()
}

#[test]
fn given_defaults_when_resolved_then_interactive_even_without_terminal() {
    let frontend = resolve_frontend(&cli(&[]), &FrontendConfig::default(), false);

    assert_eq!(frontend, Frontend::Interactive);
}

#[test]
fn given_config_jsonrpc_http_when_resolved_then_http_transport() {
    let config = FrontendConfig {
        mode: RunMode::JsonRpc,
        transport: Transport::Http,
    };

    let frontend = resolve_frontend(&cli(&[]), &config, true);

    assert_eq!(frontend, Frontend::JsonRpc(Transport::Http));
}

#[test]
fn given_flags_when_resolved_then_flags_beat_config() {
    let config = FrontendConfig {
        mode: RunMode::JsonRpc,
        transport: Transport::Http,
    };

    let interactive = resolve_frontend(&cli(&["--mode", "interactive"]), &config, false);
    let stdio = resolve_frontend(&cli(&["--transport", "stdio"]), &config, false);

    assert_eq!(interactive, Frontend::Interactive);
    assert_eq!(stdio, Frontend::JsonRpc(Transport::Stdio));
}

#[test]
fn given_auto_when_resolved_then_terminal_decides() {
    let config = FrontendConfig {
        mode: RunMode::Auto,
        transport: Transport::Stdio,
    };

    assert_eq!(resolve_frontend(&cli(&[]), &config, true), Frontend::Interactive);
    assert_eq!(
        resolve_frontend(&cli(&[]), &config, false),
        Frontend::JsonRpc(Transport::Stdio)
    );
}

#[test]
fn given_json_rpc_alias_flag_when_parsed_then_accepted() {
    let parsed = cli(&["--mode", "json-rpc", "--transport", "HTTP"]);

    assert_eq!(parsed.mode, Some(RunMode::JsonRpc));
    assert_eq!(parsed.transport, Some(Transport::Http));
}

#[test]
fn given_unknown_mode_flag_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["storyline", "--mode", "gui"]);

    assert!(result.is_err());
}

#[test]
fn given_frontend_when_displayed_then_names_transport() {
    assert_eq!(
        Frontend::JsonRpc(Transport::Http).to_string(),
        "JSON-RPC over http"
    );
    assert_eq!(Frontend::Interactive.to_string(), "interactive console");
}
