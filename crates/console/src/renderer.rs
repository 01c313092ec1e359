//! Live rendering of debug messages.
//!
//! Every accepted message is written as `LABEL: message`, followed by its
//! pretty-printed payload (if any) and a timestamped divider line. Writes are
//! synchronous and flushed per message so the log keeps up with the stream.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use serde_json::value::RawValue;

use cgdebug_protocol::{Severity, SeverityFilter};
use cgdebug_socket::MessageCallback;

/// Dashes before the divider timestamp.
const DIVIDER_LEFT: usize = 39;
/// Dashes after the divider timestamp.
const DIVIDER_RIGHT: usize = 40;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the divider timestamp.
pub type Clock = Box<dyn Fn() -> String + Send>;

/// Renders debug messages to `out`, dropping severities outside the filter.
pub struct LogRenderer<W> {
    out: W,
    filter: SeverityFilter,
    color: bool,
    clock: Clock,
}

impl<W: Write> LogRenderer<W> {
    pub fn new(out: W, filter: SeverityFilter) -> Self {
        Self {
            out,
            filter,
            color: true,
            clock: Box::new(local_timestamp),
        }
    }

    /// Enables or disables ANSI colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Replaces the wall clock used for dividers.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Renders one message. Filtered-out messages produce no output.
    pub fn on_message(&mut self, severity: Severity, message: &str, data: &str) -> io::Result<()> {
        if !self.filter.contains(severity) {
            return Ok(());
        }

        let line = format!("{}: {message}", severity.label());
        writeln!(self.out, "{}", self.paint(severity, &line))?;

        if !data.is_empty() {
            let payload = format_payload(data);
            writeln!(self.out, "{}", self.paint(severity, &payload))?;
        }

        let divider = divider(&(self.clock)());
        if self.color {
            writeln!(self.out, "{}", divider.cyan())?;
        } else {
            writeln!(self.out, "{divider}")?;
        }
        self.out.flush()
    }

    /// Consumes the renderer into a transport message callback.
    pub fn into_callback(mut self) -> MessageCallback
    where
        W: Send + 'static,
    {
        Box::new(move |severity, message, data| self.on_message(severity, message, data))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, severity: Severity, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        style(severity, text).to_string()
    }
}

/// Visual weight of each severity.
fn style(severity: Severity, text: &str) -> ColoredString {
    match severity {
        Severity::Trace => text.dimmed(),
        Severity::Info => text.normal(),
        Severity::Warning => text.yellow(),
        Severity::Error => text.red().bold(),
    }
}

/// Pretty-prints a JSON payload with two-space indentation, or returns it
/// unchanged if it is not valid JSON.
///
/// Only whitespace changes: keys, their order and number text are printed
/// exactly as received.
pub fn format_payload(data: &str) -> String {
    match serde_json::from_str::<&RawValue>(data) {
        Ok(raw) => indent(raw.get()),
        Err(_) => data.to_string(),
    }
}

/// Re-indents validated JSON text. Empty containers stay on one line.
fn indent(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut depth = 0usize;
    let mut opened = false;
    let mut in_string = false;
    let mut escaped = false;

    for c in json.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if matches!(c, ' ' | '\t' | '\n' | '\r') {
            continue;
        }
        if opened && !matches!(c, '}' | ']') {
            newline(&mut out, depth);
        }
        let was_opened = std::mem::take(&mut opened);

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '{' | '[' => {
                out.push(c);
                depth += 1;
                opened = true;
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if !was_opened {
                    newline(&mut out, depth);
                }
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            _ => out.push(c),
        }
    }
    out
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Full-width divider carrying `timestamp`.
pub fn divider(timestamp: &str) -> String {
    format!(
        "{}{timestamp}{}",
        "-".repeat(DIVIDER_LEFT),
        "-".repeat(DIVIDER_RIGHT)
    )
}

fn local_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
