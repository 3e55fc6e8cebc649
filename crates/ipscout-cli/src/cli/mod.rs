//! CLI argument parsing and dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Invocation, USAGE};
use clap::Parser;
use colored::Colorize;
use ipscout_client::{ipinfo_token_from_env, ReconClient};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::Console;

/// Run the CLI application.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let no_color = cli.no_color || std::env::var_os("NO_COLOR").is_some();
    if no_color {
        colored::control::set_override(false);
    }

    let Some(invocation) = Invocation::from_cli(cli.ip, cli.rest) else {
        eprintln!("{}", USAGE.bright_yellow());
        return Ok(ExitCode::from(1));
    };

    // A broken config file should not stop a lookup.
    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Ignoring config:".bright_yellow());
        Config::default()
    });

    let mut client = ReconClient::builder()
        .endpoints(config.endpoints())
        .ipinfo_token(ipinfo_token_from_env())
        .timeout(config.http_timeout());
    if let Some(agent) = &config.user_agent {
        client = client.user_agent(agent);
    }

    let ctx = commands::Context {
        client: client.build()?,
        scan: config.scan_config(),
        explain: cli.explain,
        progress: io::stderr().is_terminal(),
    };

    let mut console = Console::stdout(!no_color);
    let outcome = commands::dispatch(&ctx, &mut console, &invocation).await;

    Ok(finish(outcome))
}

/// Map the dispatch outcome to an exit code.
///
/// Only a missing IP address exits non-zero, so a failed write (a closed
/// pipe, say) is reported on stderr and the run still counts as done.
fn finish(outcome: io::Result<()>) -> ExitCode {
    if let Err(e) = outcome {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("{} {e}", "Output error:".bright_red());
        }
        tracing::debug!(error = %e, "writing results failed");
    }
    ExitCode::SUCCESS
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
