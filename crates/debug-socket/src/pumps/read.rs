//! WebSocket read pump: delivers debug messages to the callback.

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite;
use tracing::{debug, trace, warn};

use cgdebug_protocol::DebugMessage;
use cgdebug_protocol::constants::{WS_MAX_MESSAGE_SIZE, WS_PONG_WAIT};

use crate::error::SocketError;
use crate::transport::MessageCallback;

/// Reads frames until the connection closes, invoking `on_message` inline for
/// every debug message.
///
/// Returns `Ok(())` on a close frame or end of stream. Uses a read deadline
/// to detect dead connections: if nothing arrives within [`WS_PONG_WAIT`]
/// the pump gives up with [`SocketError::Timeout`].
pub(crate) async fn read_pump<S>(
    mut read: S,
    mut on_message: Option<&mut MessageCallback>,
    write_tx: &mpsc::Sender<tungstenite::Message>,
) -> Result<(), SocketError>
where
    S: StreamExt<Item = Result<tungstenite::Message, tungstenite::Error>> + Unpin,
{
    let deadline = tokio::time::sleep(WS_PONG_WAIT);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            () = &mut deadline => {
                warn!("no frames within {WS_PONG_WAIT:?}, connection dead");
                return Err(SocketError::Timeout);
            }

            msg = read.next() => {
                let msg = match msg {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        warn!("WebSocket read error: {e}");
                        return Err(e.into());
                    }
                    None => {
                        debug!("WebSocket stream ended");
                        return Ok(());
                    }
                };

                // Any incoming frame proves the peer is alive.
                deadline.as_mut().reset(tokio::time::Instant::now() + WS_PONG_WAIT);

                match msg {
                    tungstenite::Message::Text(text) => {
                        handle_text_message(&text, on_message.as_deref_mut())?;
                    }
                    tungstenite::Message::Ping(data) => {
                        trace!("received ping, sending pong");
                        let _ = write_tx.send(tungstenite::Message::Pong(data)).await;
                    }
                    tungstenite::Message::Pong(_) => {
                        trace!("received pong");
                    }
                    tungstenite::Message::Close(frame) => {
                        debug!(?frame, "received close frame");
                        return Ok(());
                    }
                    _ => {} // Binary: ignore
                }
            }
        }
    }
}

/// Parses one text frame and hands it to the callback.
///
/// Malformed frames are logged and skipped; only a failing callback is an error.
fn handle_text_message(
    text: &str,
    on_message: Option<&mut MessageCallback>,
) -> Result<(), SocketError> {
    if text.len() > WS_MAX_MESSAGE_SIZE {
        warn!("message too large ({} bytes), dropping", text.len());
        return Ok(());
    }

    let msg: DebugMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            warn!("failed to parse debug message: {e}");
            return Ok(());
        }
    };

    trace!(severity = %msg.severity, "received debug message");

    match on_message {
        Some(cb) => cb(msg.severity, &msg.message, msg.data_str()).map_err(SocketError::Output),
        None => {
            warn!(severity = %msg.severity, "no message callback set, dropping debug message");
            Ok(())
        }
    }
}
