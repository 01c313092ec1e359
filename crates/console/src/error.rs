//! Error types for the debug console.

use cgdebug_protocol::TargetKind;
use cgdebug_sessions::StoreError;
use cgdebug_socket::SocketError;

use crate::prompt::PromptError;

/// Everything that can end a debug console run.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The operator aborted a prompt. Never shown as an error.
    #[error("cancelled")]
    Cancelled,

    #[error("input error: {0}")]
    Input(#[source] std::io::Error),

    /// An operator-facing precondition failed, e.g. no saved sessions.
    #[error("{0}")]
    Operator(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to connect to {target}")]
    Connection {
        target: TargetKind,
        #[source]
        source: SocketError,
    },

    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

impl ConsoleError {
    /// Returns `true` if the run ended because the operator cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConsoleError::Cancelled)
    }

    /// Maps a transport failure for `target`. A failing message sink is an
    /// output error, everything else a connection failure.
    pub fn from_socket(target: TargetKind, err: SocketError) -> Self {
        match err {
            SocketError::Output(e) => ConsoleError::Output(e),
            source => ConsoleError::Connection { target, source },
        }
    }
}

impl From<PromptError> for ConsoleError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Cancelled => ConsoleError::Cancelled,
            PromptError::Io(e) => ConsoleError::Input(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_names_target() {
        for (kind, text) in [
            (TargetKind::Server, "failed to connect to server"),
            (TargetKind::Game, "failed to connect to game"),
            (TargetKind::Player, "failed to connect to player"),
        ] {
            let err = ConsoleError::from_socket(kind, SocketError::Timeout);
            assert_eq!(err.to_string(), text);
        }
    }

    #[test]
    fn output_failure_is_not_a_connection_error() {
        let err = ConsoleError::from_socket(
            TargetKind::Game,
            SocketError::Output(std::io::Error::other("closed")),
        );
        assert!(matches!(err, ConsoleError::Output(_)));
    }

    #[test]
    fn prompt_cancel_maps_to_cancelled() {
        let err: ConsoleError = PromptError::Cancelled.into();
        assert!(err.is_cancelled());

        let err: ConsoleError = PromptError::Io(std::io::Error::other("tty gone")).into();
        assert!(!err.is_cancelled());
        assert!(matches!(err, ConsoleError::Input(_)));
    }

    #[test]
    fn store_errors_pass_through_unchanged() {
        let err: ConsoleError = StoreError::NoDataDir.into();
        assert_eq!(err.to_string(), StoreError::NoDataDir.to_string());
    }

    #[test]
    fn operator_error_displays_message() {
        let err = ConsoleError::Operator("no sessions available".into());
        assert_eq!(err.to_string(), "no sessions available");
    }
}
