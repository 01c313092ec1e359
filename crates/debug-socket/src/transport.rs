//! The transport contract the console depends on.

use std::future::Future;

use cgdebug_protocol::{ConnectionTarget, Severity, SeverityFilter};

use crate::error::SocketError;

/// Callback invoked for every inbound debug message: `(severity, message, data)`.
///
/// `data` is the raw JSON payload, or `""` when the message has none.
/// Returning an error ends the session with [`SocketError::Output`].
pub type MessageCallback = Box<dyn FnMut(Severity, &str, &str) -> std::io::Result<()> + Send>;

/// A connection that streams debug messages until it closes.
///
/// Each `debug_*` call opens the connection, delivers every message to the
/// registered callback in arrival order, and resolves only once the
/// connection has closed or failed.
pub trait DebugTransport {
    /// Sets which severities the server should send.
    fn set_severities(&mut self, severities: SeverityFilter);

    /// Registers the message callback, replacing any previous one.
    fn on_message(&mut self, callback: MessageCallback);

    fn debug_server(&mut self) -> impl Future<Output = Result<(), SocketError>> + Send;

    fn debug_game(&mut self, game_id: &str) -> impl Future<Output = Result<(), SocketError>> + Send;

    fn debug_player(
        &mut self,
        game_id: &str,
        player_id: &str,
        player_secret: &str,
    ) -> impl Future<Output = Result<(), SocketError>> + Send;

    /// Dispatches to the `debug_*` call matching `target`.
    fn debug_target(
        &mut self,
        target: &ConnectionTarget,
    ) -> impl Future<Output = Result<(), SocketError>> + Send
    where
        Self: Send,
    {
        async move {
            match target {
                ConnectionTarget::Server => self.debug_server().await,
                ConnectionTarget::Game { game_id } => self.debug_game(game_id).await,
                ConnectionTarget::Player {
                    game_id,
                    player_id,
                    player_secret,
                } => self.debug_player(game_id, player_id, player_secret).await,
            }
        }
    }
}
