//! Turns operator answers into a debug target.
//!
//! Asks only what the chosen target needs. For a player, saved sessions of
//! the current endpoint can stand in for typing the game id, player id and
//! secret.

use tracing::debug;

use cgdebug_protocol::{ConnectionTarget, Severity, SeverityFilter, TargetKind};
use cgdebug_sessions::SessionSource;

use crate::error::ConsoleError;
use crate::prompt::Prompter;

/// Asks for the game server URL.
pub fn prompt_endpoint<P: Prompter>(prompter: &mut P) -> Result<String, ConsoleError> {
    Ok(prompter.input("Game server URL:")?)
}

/// Asks which severities to display, pre-selecting `defaults`.
pub fn prompt_severities<P: Prompter>(
    prompter: &mut P,
    defaults: SeverityFilter,
) -> Result<SeverityFilter, ConsoleError> {
    let options: Vec<String> = Severity::ALL.iter().map(|s| s.name().to_string()).collect();
    let picked = prompter.multi_select("Severities:", &options, &defaults.indices())?;
    picked
        .into_iter()
        .map(|i| Severity::from_index(i).ok_or_else(|| invalid_selection(i)))
        .collect()
}

/// Resolves the debug target for `endpoint`.
pub fn resolve_target<P: Prompter, S: SessionSource>(
    prompter: &mut P,
    store: &S,
    endpoint: &str,
) -> Result<ConnectionTarget, ConsoleError> {
    let options: Vec<String> = TargetKind::ALL.iter().map(|k| k.name().to_string()).collect();
    let choice = prompter.select("Target:", &options)?;
    let kind = TargetKind::from_index(choice).ok_or_else(|| invalid_selection(choice))?;
    debug!(%kind, endpoint, "target selected");

    match kind {
        TargetKind::Server => Ok(ConnectionTarget::Server),
        TargetKind::Game => Ok(ConnectionTarget::Game {
            game_id: prompter.input("Game ID:")?,
        }),
        TargetKind::Player => resolve_player(prompter, store, endpoint),
    }
}

fn resolve_player<P: Prompter, S: SessionSource>(
    prompter: &mut P,
    store: &S,
    endpoint: &str,
) -> Result<ConnectionTarget, ConsoleError> {
    let from_storage = if store.has_sessions(endpoint)? {
        prompter.yes_no("Select player from session storage", false)?
    } else {
        false
    };

    if from_storage {
        return select_from_storage(prompter, store, endpoint);
    }

    let game_id = prompter.input("Game ID:")?;
    let player_id = prompter.input("Player ID:")?;
    let player_secret = prompter.input("Player secret:")?;
    Ok(ConnectionTarget::Player {
        game_id,
        player_id,
        player_secret,
    })
}

fn select_from_storage<P: Prompter, S: SessionSource>(
    prompter: &mut P,
    store: &S,
    endpoint: &str,
) -> Result<ConnectionTarget, ConsoleError> {
    let users = store.list_usernames(endpoint)?;
    if users.is_empty() {
        return Err(ConsoleError::Operator("no sessions available".into()));
    }

    let index = prompter.select("User:", &users)?;
    let username = users.get(index).ok_or_else(|| invalid_selection(index))?;
    let record = store.load_session(endpoint, username)?;
    debug!(endpoint, username, "using saved session");
    Ok(record.into_target())
}

fn invalid_selection(index: usize) -> ConsoleError {
    ConsoleError::Operator(format!("invalid selection: {index}"))
}
