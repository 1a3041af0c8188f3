// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log levels and their two associated mappings: the filtering ordinal and the
//! console destination.
//!
//! `Success` and `Fail` are display aliases. They filter and write like `Info` and
//! `Error`, but keep their own tag text and styling.

use std::fmt::Display;
use std::str::FromStr;

/// A named severity for a log call.
///
/// Ordered by verbosity for filtering, see [Level::ordinal].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Print-style debugging. Most verbose.
    Debug,
    /// General information.  The default threshold.
    #[default]
    Info,
    /// Displayed as `SUCCESS`, filtered and written like [Level::Info].
    Success,
    /// Suspicious condition.
    Warn,
    /// Runtime error.
    Error,
    /// Displayed as `FAIL`, filtered and written like [Level::Error].
    Fail,
    /// Threshold only.  Excludes all emission; there is no method that logs at this level.
    None,
}

/// The console channel a write goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Debug,
    Info,
    Warn,
    Error,
    /// Untagged output, used by the raw path.
    Log,
}

/**
Error returned when a string does not name a [Level].
*/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level {0:?}")]
pub struct ParseLevelError(pub String);

impl Level {
    /// Every level a logger can emit at, in method order.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Success,
        Level::Warn,
        Level::Error,
        Level::Fail,
    ];

    /**
    The filtering ordinal.  Lower is more verbose.

    `debug < info < warn < error < none`, with `success` sharing `info`'s ordinal and
    `fail` sharing `error`'s.
    */
    pub const fn ordinal(self) -> u8 {
        match self {
            Level::Debug => 0,
            Level::Info | Level::Success => 1,
            Level::Warn => 2,
            Level::Error | Level::Fail => 3,
            Level::None => 4,
        }
    }

    /**
    Whether a call at `level` passes when `self` is the configured threshold.

    Levels more verbose than the threshold are suppressed.  `Level::None` as a level
    never passes, so a `None` threshold suppresses everything.
    */
    pub const fn allows(self, level: Level) -> bool {
        !matches!(level, Level::None) && level.ordinal() >= self.ordinal()
    }

    pub const fn destination(self) -> Destination {
        match self {
            Level::Debug => Destination::Debug,
            Level::Info | Level::Success => Destination::Info,
            Level::Warn => Destination::Warn,
            Level::Error | Level::Fail => Destination::Error,
            Level::None => Destination::Log,
        }
    }

    /// Lower-case name, as accepted by [FromStr].
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fail => "fail",
            Level::None => "none",
        }
    }

    /// Upper-case name, as it appears inside the `[LEVEL]` tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fail => "FAIL",
            Level::None => "NONE",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [
            Level::Debug,
            Level::Info,
            Level::Success,
            Level::Warn,
            Level::Error,
            Level::Fail,
            Level::None,
        ]
        .into_iter()
        .find(|level| level.name().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/*
Boilerplate notes.

Ord is deliberately not derived: Success/Info and Fail/Error share an ordinal but are
distinct values, so a derived order would disagree with filtering.  Use `ordinal`.
Copy is fine, it's a fieldless enum.
*/
