//! WebSocket client for CodeGame debug streams.
//!
//! One connection per debug session: the read loop runs inline on the
//! caller's task so messages reach the callback in arrival order. The
//! writer (pong replies and keepalive pings) is polled on the same task.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite;
use tokio_tungstenite::tungstenite::protocol::WebSocketConfig;
use tracing::{debug, info};

use cgdebug_protocol::constants::{WS_MAX_MESSAGE_SIZE, WS_WRITE_QUEUE};
use cgdebug_protocol::{ConnectionTarget, SeverityFilter};

use crate::error::SocketError;
use crate::pumps::{read::read_pump, write::write_pump};
use crate::transport::{DebugTransport, MessageCallback};
use crate::url::{debug_path, debug_url, is_secure, trim_endpoint};

/// Debug socket bound to one game server endpoint.
pub struct DebugSocket {
    endpoint: String,
    secure: bool,
    severities: SeverityFilter,
    on_message: Option<MessageCallback>,
}

impl DebugSocket {
    /// Creates a socket for the server at `url`.
    ///
    /// `url` may carry an `http(s)://` or `ws(s)://` scheme; `https`/`wss`
    /// select TLS. The scheme is not part of [`DebugSocket::endpoint`].
    pub fn new(url: &str) -> Result<Self, SocketError> {
        let endpoint = trim_endpoint(url);
        if endpoint.is_empty() || endpoint.contains(char::is_whitespace) {
            return Err(SocketError::InvalidEndpoint(url.to_string()));
        }
        Ok(Self {
            endpoint: endpoint.to_string(),
            secure: is_secure(url),
            severities: SeverityFilter::default(),
            on_message: None,
        })
    }

    /// The normalized endpoint (`host[:port][/path]`), also the key of saved sessions.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn severities(&self) -> SeverityFilter {
        self.severities
    }

    /// Connects to `target` and streams until the connection ends.
    async fn stream(&mut self, target: &ConnectionTarget) -> Result<(), SocketError> {
        let url = debug_url(&self.endpoint, self.secure, target, self.severities);
        let path = debug_path(target);
        info!(endpoint = %self.endpoint, %path, severities = ?self.severities, "opening debug socket");

        if self.secure {
            // Fails only if a provider is already installed, which is fine.
            let _ = rustls::crypto::ring::default_provider().install_default();
        }

        let mut ws_config = WebSocketConfig::default();
        ws_config.max_message_size = Some(WS_MAX_MESSAGE_SIZE);
        ws_config.max_frame_size = Some(WS_MAX_MESSAGE_SIZE);
        let (ws_stream, _) =
            tokio_tungstenite::connect_async_with_config(url, Some(ws_config), false).await?;
        debug!(%path, "debug socket connected");
        let (sink, frames) = ws_stream.split();

        let (reply_tx, reply_rx) = mpsc::channel::<tungstenite::Message>(WS_WRITE_QUEUE);
        let writer = write_pump(sink, reply_rx);
        tokio::pin!(writer);

        // The writer only finishes first when the peer stops accepting frames.
        let (result, writer_done) = tokio::select! {
            read = read_pump(frames, self.on_message.as_mut(), &reply_tx) => (read, false),
            written = &mut writer => (written, true),
        };
        if !writer_done {
            // Closing the reply queue makes the writer send its close frame.
            drop(reply_tx);
            if let Err(e) = writer.await {
                debug!(%path, "close after stream end failed: {e}");
            }
        }

        debug!(%path, ok = result.is_ok(), "debug socket closed");
        result
    }
}

impl DebugTransport for DebugSocket {
    fn set_severities(&mut self, severities: SeverityFilter) {
        self.severities = severities;
    }

    fn on_message(&mut self, callback: MessageCallback) {
        self.on_message = Some(callback);
    }

    async fn debug_server(&mut self) -> Result<(), SocketError> {
        self.stream(&ConnectionTarget::Server).await
    }

    async fn debug_game(&mut self, game_id: &str) -> Result<(), SocketError> {
        let target = ConnectionTarget::Game {
            game_id: game_id.to_string(),
        };
        self.stream(&target).await
    }

    async fn debug_player(
        &mut self,
        game_id: &str,
        player_id: &str,
        player_secret: &str,
    ) -> Result<(), SocketError> {
        let target = ConnectionTarget::Player {
            game_id: game_id.to_string(),
            player_id: player_id.to_string(),
            player_secret: player_secret.to_string(),
        };
        self.stream(&target).await
    }
}
