use tokio_tungstenite::tungstenite;

/// Errors from the debug socket.
#[derive(Debug, thiserror::Error)]
pub enum SocketError {
    #[error("WebSocket error: {0}")]
    Ws(#[from] tungstenite::Error),

    #[error("invalid endpoint: {0:?}")]
    InvalidEndpoint(String),

    #[error("connection timed out")]
    Timeout,

    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

impl SocketError {
    /// Returns `true` if the session ended because the message callback
    /// could not write, rather than because of the connection.
    pub fn is_output(&self) -> bool {
        matches!(self, SocketError::Output(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_error_display() {
        assert_eq!(SocketError::Timeout.to_string(), "connection timed out");
        assert_eq!(
            SocketError::InvalidEndpoint(String::new()).to_string(),
            "invalid endpoint: \"\""
        );
        let err = SocketError::Output(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert!(err.is_output());
        assert_eq!(err.to_string(), "output error: pipe closed");
        assert!(!SocketError::Timeout.is_output());
    }
}
