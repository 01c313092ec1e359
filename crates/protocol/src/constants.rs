use std::time::Duration;

/// How often to send pings on an open debug socket.
pub const WS_PING_PERIOD: Duration = Duration::from_secs(20);

/// Time to wait for any incoming frame before the connection is considered dead.
///
/// Any frame (pong, debug message, ping) resets the deadline, so a quiet
/// server that still answers pings keeps the session open.
pub const WS_PONG_WAIT: Duration = Duration::from_secs(60);

/// Maximum inbound message size in bytes (16 MB).
pub const WS_MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024;

/// Capacity of the outbound frame queue.
pub const WS_WRITE_QUEUE: usize = 16;

/// Debug endpoint for the whole server.
pub const DEBUG_SERVER_PATH: &str = "/api/debug";

/// Prefix of the per-game endpoints (`/api/games/{gameId}/...`).
pub const GAMES_PATH: &str = "/api/games";

/// Query parameter carrying the player secret.
pub const PLAYER_SECRET_PARAM: &str = "player_secret";

/// Severity bitmask: `trace` messages.
pub const SEVERITY_TRACE: u8 = 1;
/// Severity bitmask: `info` messages.
pub const SEVERITY_INFO: u8 = 2;
/// Severity bitmask: `warning` messages.
pub const SEVERITY_WARNING: u8 = 4;
/// Severity bitmask: `error` messages.
pub const SEVERITY_ERROR: u8 = 8;
/// All severities.
pub const SEVERITY_ALL: u8 = SEVERITY_TRACE | SEVERITY_INFO | SEVERITY_WARNING | SEVERITY_ERROR;
/// Default severity mask: Info + Warning + Error (trace off).
pub const SEVERITY_DEFAULT: u8 = SEVERITY_INFO | SEVERITY_WARNING | SEVERITY_ERROR;
