//! Endpoint normalization and debug URL construction.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use cgdebug_protocol::constants::{DEBUG_SERVER_PATH, GAMES_PATH, PLAYER_SECRET_PARAM};
use cgdebug_protocol::{ConnectionTarget, Severity, SeverityFilter};

const SECURE_SCHEMES: &[&str] = &["https://", "wss://"];
const PLAIN_SCHEMES: &[&str] = &["http://", "ws://"];

/// Strips a leading scheme and trailing slashes from an operator-supplied URL.
///
/// The result is the endpoint key shared with saved sessions, e.g.
/// `https://games.example.com/` becomes `games.example.com`.
pub fn trim_endpoint(url: &str) -> &str {
    let url = url.trim();
    let url = SECURE_SCHEMES
        .iter()
        .chain(PLAIN_SCHEMES)
        .find_map(|scheme| strip_prefix_ignore_case(url, scheme))
        .unwrap_or(url);
    url.trim_end_matches('/')
}

/// Returns `true` if the URL asks for a TLS connection.
pub fn is_secure(url: &str) -> bool {
    let url = url.trim();
    SECURE_SCHEMES
        .iter()
        .any(|scheme| strip_prefix_ignore_case(url, scheme).is_some())
}

/// Builds the WebSocket URL for a debug target.
pub fn debug_url(
    endpoint: &str,
    secure: bool,
    target: &ConnectionTarget,
    severities: SeverityFilter,
) -> String {
    let scheme = if secure { "wss" } else { "ws" };
    let mut query = severity_query(severities);
    if let ConnectionTarget::Player { player_secret, .. } = target {
        query.push('&');
        query.push_str(PLAYER_SECRET_PARAM);
        query.push('=');
        query.push_str(&encode(player_secret));
    }
    format!("{scheme}://{endpoint}{}?{query}", debug_path(target))
}

/// Path part of the debug URL. Contains no secrets, safe to log.
pub fn debug_path(target: &ConnectionTarget) -> String {
    match target {
        ConnectionTarget::Server => DEBUG_SERVER_PATH.to_string(),
        ConnectionTarget::Game { game_id } => {
            format!("{GAMES_PATH}/{}/debug", encode(game_id))
        }
        ConnectionTarget::Player {
            game_id, player_id, ..
        } => format!(
            "{GAMES_PATH}/{}/players/{}/debug",
            encode(game_id),
            encode(player_id)
        ),
    }
}

/// Encodes the filter as `trace=..&info=..&warning=..&error=..`.
pub fn severity_query(severities: SeverityFilter) -> String {
    Severity::ALL
        .iter()
        .map(|s| format!("{}={}", s.as_str(), severities.contains(*s)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
