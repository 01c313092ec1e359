//! Streaming phase of a debug session.

use std::io::Write;

use colored::Colorize;
use tracing::info;

use cgdebug_protocol::{ConnectionTarget, TargetKind};
use cgdebug_socket::DebugTransport;

use crate::error::ConsoleError;

const BANNER_RULE: usize = 40;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Presentation switches for the streaming phase.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub clear_screen: bool,
    pub color: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
        }
    }
}

/// Banner printed above the log of `kind`.
pub fn banner(kind: TargetKind) -> String {
    let title = match kind {
        TargetKind::Server => " Server Debug Log ",
        TargetKind::Game => "= Game Debug Log =",
        TargetKind::Player => " Player Debug Log ",
    };
    let rule = "=".repeat(BANNER_RULE);
    format!("{rule}{title}{rule}")
}

/// Prints the banner to `out`, then streams `target` through `transport`
/// until the connection ends.
///
/// The transport must already carry the message callback and severities.
pub async fn run_debug_session<T, W>(
    transport: &mut T,
    target: &ConnectionTarget,
    out: &mut W,
    opts: SessionOptions,
) -> Result<(), ConsoleError>
where
    T: DebugTransport + Send,
    W: Write,
{
    let kind = target.kind();
    write_banner(out, kind, opts).map_err(ConsoleError::Output)?;

    info!(target_kind = %kind, "debug stream started");
    transport
        .debug_target(target)
        .await
        .map_err(|e| ConsoleError::from_socket(kind, e))?;
    info!(target_kind = %kind, "debug stream closed");
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, kind: TargetKind, opts: SessionOptions) -> std::io::Result<()> {
    if opts.clear_screen {
        write!(out, "{CLEAR_SCREEN}")?;
    }
    let text = banner(kind);
    if opts.color {
        writeln!(out, "{}", text.cyan().bold())?;
    } else {
        writeln!(out, "{text}")?;
    }
    out.flush()
}
