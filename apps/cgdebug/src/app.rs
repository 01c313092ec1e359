//! Orchestrates one debug console run.

use std::io;

use cgdebug_console::{
    ConsoleError, LinePrompter, LogRenderer, Prompter, SessionOptions, prompt_endpoint,
    prompt_severities, resolve_target, run_debug_session,
};
use cgdebug_protocol::{ConnectionTarget, SeverityFilter};
use cgdebug_sessions::{SessionSource, SessionStore};
use cgdebug_socket::{DebugSocket, DebugTransport};

use crate::config::Config;

/// Everything the interactive phase decides before streaming starts.
pub struct Plan {
    pub socket: DebugSocket,
    pub target: ConnectionTarget,
    pub severities: SeverityFilter,
}

/// Runs the interactive phase, then streams to stdout until the connection ends.
pub fn run(config: &Config, url: Option<String>) -> anyhow::Result<()> {
    let mut prompter = LinePrompter::new().map_err(ConsoleError::from)?;
    let store = open_store(config)?;
    let Plan {
        mut socket,
        target,
        severities,
    } = prepare(&mut prompter, &store, url, config.severity_filter())?;
    drop(prompter);

    let renderer = LogRenderer::new(io::stdout(), severities).with_color(config.color);
    socket.on_message(renderer.into_callback());

    let opts = SessionOptions {
        clear_screen: config.clear_screen,
        color: config.color,
    };
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_debug_session(&mut socket, &target, &mut io::stdout(), opts))?;

    tracing::debug!("debug stream ended");
    Ok(())
}

/// Asks for the URL (unless given), the severities and the target.
pub fn prepare<P: Prompter, S: SessionSource>(
    prompter: &mut P,
    store: &S,
    url: Option<String>,
    defaults: SeverityFilter,
) -> Result<Plan, ConsoleError> {
    let url = match url {
        Some(url) => url,
        None => prompt_endpoint(prompter)?,
    };
    let mut socket = DebugSocket::new(&url).map_err(|e| ConsoleError::Operator(e.to_string()))?;

    let severities = prompt_severities(prompter, defaults)?;
    socket.set_severities(severities);

    let target = resolve_target(prompter, store, socket.endpoint())?;
    tracing::debug!(endpoint = socket.endpoint(), ?target, ?severities, "debug target resolved");

    Ok(Plan {
        socket,
        target,
        severities,
    })
}

fn open_store(config: &Config) -> Result<SessionStore, ConsoleError> {
    match &config.data_dir {
        Some(dir) => Ok(SessionStore::new(dir)),
        None => Ok(SessionStore::open_default()?),
    }
}
