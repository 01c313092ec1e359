//! WebSocket write side: reader replies and keepalive pings share one sink.

use futures_util::{Sink, SinkExt};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{debug, trace, warn};

use cgdebug_protocol::constants::WS_PING_PERIOD;

use crate::error::SocketError;

/// Owns the sink for the lifetime of a debug stream.
///
/// Forwards frames queued by the read pump (pongs) and pings every
/// [`WS_PING_PERIOD`]. When the queue closes the stream is over, so a close
/// frame is sent and the pump returns `Ok`. A frame the peer no longer
/// accepts ends the stream with [`SocketError::Timeout`].
pub(crate) async fn write_pump<S>(
    mut sink: S,
    mut replies: mpsc::Receiver<Message>,
) -> Result<(), SocketError>
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    let mut keepalive = interval_at(Instant::now() + WS_PING_PERIOD, WS_PING_PERIOD);

    loop {
        let frame = tokio::select! {
            reply = replies.recv() => match reply {
                Some(frame) => frame,
                None => break,
            },
            _ = keepalive.tick() => {
                trace!("keepalive ping");
                Message::Ping(Vec::new().into())
            }
        };

        if let Err(e) = sink.send(frame).await {
            warn!("debug socket no longer writable: {e}");
            return Err(SocketError::Timeout);
        }
    }

    debug!("debug stream over, sending close");
    let _ = sink.send(Message::Close(None)).await;
    Ok(())
}
