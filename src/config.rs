// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration and its resolution.
//!
//! A logger never holds on to a configuration.  Instead it holds a [ConfigProvider]
//! and asks it for a fresh [Config] at the start of every log call, so a provider
//! that closes over mutable state is observed immediately:
//!
//! ```
//! use lablog::{build_console_logger, Config, Level, MemoryWriter};
//! use std::sync::{Arc, Mutex};
//!
//! let capture = Arc::new(MemoryWriter::new());
//! let level = Arc::new(Mutex::new(Level::None));
//! let (shared, hook) = (level.clone(), capture.hook());
//! let factory = build_console_logger(move || {
//!     Config::new().log_level(*shared.lock().unwrap()).hook(hook.clone())
//! });
//! let log = factory.create("mod");
//!
//! log.debug(&[&"x"]);
//! assert!(capture.is_empty());
//!
//! *level.lock().unwrap() = Level::Debug;
//! log.debug(&[&"x"]);
//! assert_eq!(capture.drain(), vec![vec!["[mod]", "[DEBUG]", "x"]]);
//! ```
//!
//! Resolution merges the provided fields over [Config::defaults].  The host flavor
//! additionally wraps the provider in [EnvDefaults], which lowers the default
//! threshold to `debug` when the `DEBUG` environment variable is set.

use crate::args::Prefix;
use crate::hook::Hook;
use crate::level::{Level, ParseLevelError};
use std::fmt::Debug;
use std::sync::Arc;

/// The threshold used when nothing else sets one.
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// The environment variable read by [debug_env_signal].
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/**
A partial configuration.

Every field is optional; unset fields fall back to the defaults at resolution time.
*/
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Emission threshold.
    pub log_level: Option<Level>,
    /// Evaluated fresh on every emitted call; its output is the first arg.
    pub prefix: Option<Prefix>,
    pub hook: Option<Hook>,
}

impl Config {
    /// An empty configuration.  Every field resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults: threshold `info`, no prefix, no hook.
    pub fn defaults() -> Self {
        Self {
            log_level: Some(DEFAULT_LOG_LEVEL),
            prefix: None,
            hook: None,
        }
    }

    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /**
    Sets the threshold from a level name.

    Unknown names are rejected here rather than at log time.
    */
    pub fn parse_log_level(self, name: &str) -> Result<Self, ParseLevelError> {
        Ok(self.log_level(name.parse()?))
    }

    pub fn prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn hook(mut self, hook: Hook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Fills every unset field from `defaults`.  Fields set on `self` win.
    pub fn merge_over(self, defaults: Config) -> Config {
        Config {
            log_level: self.log_level.or(defaults.log_level),
            prefix: self.prefix.or(defaults.prefix),
            hook: self.hook.or(defaults.hook),
        }
    }
}

/// The effective configuration for one log call.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: Level,
    pub prefix: Option<Prefix>,
    pub hook: Option<Hook>,
}

/**
Supplies the current configuration.

Called exactly once per log call, including calls that end up filtered out, and never
at construction time.  A provider that panics aborts the log call before anything is
written.
*/
pub trait ConfigProvider: Send + Sync {
    fn current_config(&self) -> Config;
}

/// A static configuration, cloned for each call.
impl ConfigProvider for Config {
    fn current_config(&self) -> Config {
        self.clone()
    }
}

impl<F> ConfigProvider for F
where
    F: Fn() -> Config + Send + Sync,
{
    fn current_config(&self) -> Config {
        self()
    }
}

/**
Asks `provider` for its configuration once and merges it over [Config::defaults].
*/
pub fn resolve<P: ConfigProvider + ?Sized>(provider: &P) -> ResolvedConfig {
    let merged = provider.current_config().merge_over(Config::defaults());
    ResolvedConfig {
        log_level: merged.log_level.unwrap_or(DEFAULT_LOG_LEVEL),
        prefix: merged.prefix,
        hook: merged.hook,
    }
}

type SignalFn = dyn Fn() -> bool + Send + Sync;

/**
Decorates a provider with an environment-derived default.

When the debug signal is present and the inner configuration leaves `log_level`
unset, the threshold becomes `debug`.  An explicit `log_level` always wins.
The signal is read on every call.
*/
pub struct EnvDefaults<P> {
    inner: P,
    signal: Arc<SignalFn>,
}

impl<P: ConfigProvider> EnvDefaults<P> {
    /// Uses [debug_env_signal].
    pub fn new(inner: P) -> Self {
        Self::with_signal(inner, debug_env_signal)
    }

    pub fn with_signal<F>(inner: P, signal: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            inner,
            signal: Arc::new(signal),
        }
    }
}

impl<P: ConfigProvider> ConfigProvider for EnvDefaults<P> {
    fn current_config(&self) -> Config {
        let mut config = self.inner.current_config();
        if config.log_level.is_none() && (self.signal)() {
            config.log_level = Some(Level::Debug);
        }
        config
    }
}

impl<P: Debug> Debug for EnvDefaults<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvDefaults")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/**
Whether the `DEBUG` environment variable requests debug mode.

Set, non-empty, and not `0` or `false`.  Always `false` on wasm, which has no environment.
*/
pub fn debug_env_signal() -> bool {
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var_os(DEBUG_ENV_VAR)
            .is_some_and(|value| is_debug_value(&value.to_string_lossy()))
    }
    #[cfg(target_arch = "wasm32")]
    {
        false
    }
}

fn is_debug_value(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}
