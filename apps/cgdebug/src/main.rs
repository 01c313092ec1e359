//! CodeGame debug console entry point.

mod app;
mod config;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cgdebug_console::ConsoleError;

/// Watch the live debug log of a CodeGame server, game or player.
#[derive(Debug, Parser)]
#[command(name = "cgdebug", version, about)]
struct Cli {
    /// Game server URL, e.g. `localhost:8080` or `https://games.example.com`.
    /// Prompted for when omitted.
    url: Option<String>,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries the rendered log.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting cgdebug");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::Config::load()?;
    if !config.color {
        colored::control::set_override(false);
    }
    app::run(&config, cli.url)
}

/// Prints `err` once. Cancellation is silent and not a failure.
fn report(err: &anyhow::Error) -> ExitCode {
    let message = match err.downcast_ref::<ConsoleError>() {
        Some(e) if e.is_cancelled() => return ExitCode::SUCCESS,
        Some(e) => {
            tracing::debug!(error = ?e, "console error");
            e.to_string()
        }
        None => format!("{err:#}"),
    };
    eprintln!("{}", format!("ERROR: {message}").red());
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_url_is_optional() {
        let cli = Cli::try_parse_from(["cgdebug"]).unwrap();
        assert!(cli.url.is_none());

        let cli = Cli::try_parse_from(["cgdebug", "localhost:8080"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("localhost:8080"));

        assert!(Cli::try_parse_from(["cgdebug", "a", "b"]).is_err());
    }

    #[test]
    fn cancellation_exits_successfully() {
        let err = anyhow::Error::new(ConsoleError::Cancelled);
        assert_eq!(report(&err), ExitCode::SUCCESS);

        let err = anyhow::Error::new(ConsoleError::Operator("no sessions available".into()));
        assert_eq!(report(&err), ExitCode::FAILURE);

        assert_eq!(report(&anyhow::anyhow!("bad config")), ExitCode::FAILURE);
    }
}
