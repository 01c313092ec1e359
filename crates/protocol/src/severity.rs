//! Debug message severities and the fixed-size severity filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    SEVERITY_ALL, SEVERITY_DEFAULT, SEVERITY_ERROR, SEVERITY_INFO, SEVERITY_TRACE,
    SEVERITY_WARNING,
};

/// Severity of a debug message, ordered `Trace < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::Trace,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the bitmask bit for this severity.
    pub const fn bit(self) -> u8 {
        match self {
            Severity::Trace => SEVERITY_TRACE,
            Severity::Info => SEVERITY_INFO,
            Severity::Warning => SEVERITY_WARNING,
            Severity::Error => SEVERITY_ERROR,
        }
    }

    /// Upper-case label used as the rendered line prefix.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Display name used in menus.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    /// Wire name, also used as the query parameter key.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the severity at `index` in [`Severity::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of severities, stored as a bitmask.
///
/// Built once before a debug session and never changed afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeverityFilter(u8);

impl SeverityFilter {
    /// Creates a filter from a raw mask. Unknown bits are dropped.
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & SEVERITY_ALL)
    }

    /// A filter that accepts every severity.
    pub const fn all() -> Self {
        Self(SEVERITY_ALL)
    }

    /// A filter that accepts nothing.
    pub const fn none() -> Self {
        Self(0)
    }

    /// Returns a copy of this filter that also accepts `severity`.
    pub const fn with(self, severity: Severity) -> Self {
        Self(self.0 | severity.bit())
    }

    /// Returns `true` if messages of `severity` pass the filter.
    pub fn contains(self, severity: Severity) -> bool {
        self.0 & severity.bit() != 0
    }

    /// Iterates the accepted severities in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Severity> {
        Severity::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    /// Indices (into [`Severity::ALL`]) of the accepted severities.
    pub fn indices(self) -> Vec<usize> {
        Severity::ALL
            .iter()
            .enumerate()
            .filter(|(_, s)| self.contains(**s))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for SeverityFilter {
    fn default() -> Self {
        Self(SEVERITY_DEFAULT)
    }
}

impl FromIterator<Severity> for SeverityFilter {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl fmt::Debug for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
