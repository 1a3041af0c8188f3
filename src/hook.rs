// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hook: a per-call interception point.
//!
//! A hook runs once for every call that passes level filtering, after the base
//! arguments are built and before anything is written.  It can replace the
//! argument list, replace the writer, or both.  Its result lives for one call.

use crate::level::Level;
use crate::writer::Writer;
use std::fmt::Debug;
use std::sync::Arc;

/// What the hook sees.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// The computed args: prefix, `[label]`, `[LEVEL]`.  Empty on the raw path.
    pub args: &'a [String],
    pub level: Level,
    pub label: &'a str,
    /// Whether this call came from `raw`/`r`.
    pub raw: bool,
}

/**
What the hook returns.

Either field may be absent; the default value changes nothing.
*/
#[derive(Debug, Clone, Default)]
pub struct HookOutcome {
    /// Replaces the computed args entirely.
    pub args: Option<Vec<String>>,
    /// Replaces the writer for this call.
    pub writer: Option<Writer>,
}

impl HookOutcome {
    pub fn keep() -> Self {
        Self::default()
    }

    pub fn with_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: Some(args.into_iter().map(Into::into).collect()),
            writer: None,
        }
    }

    pub fn with_writer(writer: Writer) -> Self {
        Self {
            args: None,
            writer: Some(writer),
        }
    }

    /// Sets the writer override on an existing outcome.
    pub fn writer(mut self, writer: Writer) -> Self {
        self.writer = Some(writer);
        self
    }
}

type HookFn = dyn Fn(&HookContext<'_>) -> HookOutcome + Send + Sync;

/// A user-supplied hook.
#[derive(Clone)]
pub struct Hook(Arc<HookFn>);

impl Hook {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&HookContext<'_>) -> HookOutcome + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, context: &HookContext<'_>) -> HookOutcome {
        (self.0)(context)
    }
}

impl Debug for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Hook").field(&Arc::as_ptr(&self.0)).finish()
    }
}

/**
Runs the hook, if any, over the computed args.

Returns the final args and the writer override.  `None` means use the default writer.
A panicking hook unwinds through here untouched.
*/
pub(crate) fn apply(
    hook: Option<&Hook>,
    args: Vec<String>,
    level: Level,
    label: &str,
    raw: bool,
) -> (Vec<String>, Option<Writer>) {
    let Some(hook) = hook else {
        return (args, None);
    };
    let outcome = hook.call(&HookContext {
        args: &args,
        level,
        label,
        raw,
    });
    (outcome.args.unwrap_or(args), outcome.writer)
}
