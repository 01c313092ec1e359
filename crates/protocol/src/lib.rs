//! Wire types shared by the debug console crates.

pub mod constants;
pub mod debug_message;
pub mod severity;
pub mod target;

// Re-export primary types for convenience.
pub use debug_message::DebugMessage;
pub use severity::{Severity, SeverityFilter};
pub use target::{ConnectionTarget, TargetKind};
