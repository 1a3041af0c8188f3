// SPDX-License-Identifier: MIT OR Apache-2.0

//! Building the argument list for a log line.
//!
//! The order is fixed: prefix (if configured), `[label]`, `[LEVEL]`, then the caller's
//! payload, which the writer appends.

use crate::colors;
use crate::config::ResolvedConfig;
use crate::level::Level;
use std::fmt::Debug;
use std::sync::{Arc, OnceLock};

type PrefixFn = dyn Fn() -> String + Send + Sync;

/**
Produces the first token of every emitted line, e.g. a timestamp.

Evaluated once per emitted call, and not at all for filtered calls.
*/
#[derive(Clone)]
pub struct Prefix(Arc<PrefixFn>);

impl Prefix {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn render(&self) -> String {
        (self.0)()
    }
}

impl Debug for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Prefix").field(&Arc::as_ptr(&self.0)).finish()
    }
}

static INITIAL_TIMESTAMP: OnceLock<crate::sys::Instant> = OnceLock::new();

fn initial_timestamp() -> crate::sys::Instant {
    *INITIAL_TIMESTAMP.get_or_init(crate::sys::Instant::now)
}

/**
A prefix rendering the time elapsed since the first timestamp was taken, as `[1.52ms]`.
*/
pub fn timestamp_prefix() -> Prefix {
    //pin the epoch when the prefix is created rather than at the first emitted line
    initial_timestamp();
    Prefix::new(|| {
        let duration = crate::sys::Instant::now().duration_since(initial_timestamp());
        format!("[{:?}]", duration)
    })
}

/// Prefix (freshly rendered) and bracketed label.
pub fn base_args(config: &ResolvedConfig, label: &str) -> Vec<String> {
    let mut args = Vec::with_capacity(3);
    if let Some(prefix) = &config.prefix {
        args.push(prefix.render());
    }
    args.push(format!("[{}]", label));
    args
}

/**
The bracketed, upper-cased level tag.

With `styled`, the tag is decorated by [colors::paint].
*/
pub fn level_tag(level: Level, styled: bool) -> String {
    let tag = format!("[{}]", level.tag());
    if styled {
        colors::paint(level, &tag)
    } else {
        tag
    }
}
