//! Debug socket transport.
//!
//! Opens a WebSocket to a CodeGame server's debug endpoint for the whole
//! server, one game, or one player, and delivers every debug message to a
//! callback until the connection closes.

pub mod error;
mod pumps;
pub mod socket;
pub mod transport;
pub mod url;

pub use error::SocketError;
pub use socket::DebugSocket;
pub use transport::{DebugTransport, MessageCallback};
