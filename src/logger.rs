// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger factories and logger instances.

use crate::config::{ConfigProvider, EnvDefaults};
use crate::dispatch::{Flavor, Shared, dispatch, dispatch_raw};
use crate::level::Level;
use crate::spinlock::Spinlock;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/**
Builds loggers that share one configuration source.

Cloning a factory is cheap; clones share the source.
*/
#[derive(Clone)]
pub struct LoggerFactory {
    shared: Arc<Shared>,
}

impl LoggerFactory {
    /**
    Creates a factory for `flavor`.

    For [Flavor::Host], the source is wrapped in [EnvDefaults].  The source is not
    consulted until the first log call.
    */
    pub fn new<P: ConfigProvider + 'static>(source: P, flavor: Flavor) -> Self {
        let provider: Box<dyn ConfigProvider> = match flavor {
            Flavor::Console => Box::new(source),
            Flavor::Host => Box::new(EnvDefaults::new(source)),
        };
        Self {
            shared: Arc::new(Shared { provider, flavor }),
        }
    }

    /// Creates a logger with `label`.
    pub fn create(&self, label: impl Into<String>) -> Logger {
        Logger::new(label.into(), self.shared.clone())
    }

    pub fn flavor(&self) -> Flavor {
        self.shared.flavor
    }
}

impl Default for LoggerFactory {
    /// The native flavor with built-in defaults.
    fn default() -> Self {
        build_logger(crate::config::Config::new())
    }
}

impl Debug for LoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("flavor", &self.shared.flavor)
            .finish_non_exhaustive()
    }
}

/**
Builds a factory for the current target: [Flavor::Console] on wasm, [Flavor::Host] elsewhere.

`source` is a [Config](crate::Config) or a closure returning one.
*/
pub fn build_logger<P: ConfigProvider + 'static>(source: P) -> LoggerFactory {
    LoggerFactory::new(source, Flavor::native())
}

/// Builds a [Flavor::Console] factory: plain tags, no environment defaults.
pub fn build_console_logger<P: ConfigProvider + 'static>(source: P) -> LoggerFactory {
    LoggerFactory::new(source, Flavor::Console)
}

/// Builds a [Flavor::Host] factory: colored tags, `DEBUG` lowers the default threshold.
pub fn build_host_logger<P: ConfigProvider + 'static>(source: P) -> LoggerFactory {
    LoggerFactory::new(source, Flavor::Host)
}

struct LoggerInner {
    label: String,
    shared: Arc<Shared>,
    children: Spinlock<HashMap<String, Logger>>,
}

/**
A labeled logger.

Each method takes the payload as a slice of displayable values, which the writer
receives after the prefix, label and level tag.  The macros ([debug!](crate::debug) and
friends) build the slice for you.

```
use lablog::{build_console_logger, Config, Level, MemoryWriter};
use std::sync::Arc;

let capture = Arc::new(MemoryWriter::new());
let factory = build_console_logger(Config::new().log_level(Level::Debug).hook(capture.hook()));
let log = factory.create("net");

log.info(&[&"a", &"b"]);
lablog::s!(log, "connected", 3);
assert_eq!(
    capture.drain(),
    vec![
        vec!["[net]", "[INFO]", "a", "b"],
        vec!["[net]", "[SUCCESS]", "connected", "3"],
    ]
);
```

Clones refer to the same logger: they compare equal and share the child cache.
*/
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    fn new(label: String, shared: Arc<Shared>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                label,
                shared,
                children: Spinlock::new(HashMap::new()),
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Logs at `level`.  The per-level methods call this.
    pub fn log(&self, level: Level, payload: &[&dyn Display]) {
        dispatch(&self.inner.shared, &self.inner.label, level, payload);
    }

    pub fn debug(&self, payload: &[&dyn Display]) {
        self.log(Level::Debug, payload)
    }

    pub fn info(&self, payload: &[&dyn Display]) {
        self.log(Level::Info, payload)
    }

    pub fn success(&self, payload: &[&dyn Display]) {
        self.log(Level::Success, payload)
    }

    pub fn warn(&self, payload: &[&dyn Display]) {
        self.log(Level::Warn, payload)
    }

    pub fn error(&self, payload: &[&dyn Display]) {
        self.log(Level::Error, payload)
    }

    pub fn fail(&self, payload: &[&dyn Display]) {
        self.log(Level::Fail, payload)
    }

    /**
    Writes the payload without prefix, label or level tag.

    Filtered at [RAW_LEVEL](crate::RAW_LEVEL).
    */
    pub fn raw(&self, payload: &[&dyn Display]) {
        dispatch_raw(&self.inner.shared, &self.inner.label, payload);
    }

    /// Same as [Self::debug].
    #[inline]
    pub fn d(&self, payload: &[&dyn Display]) {
        self.debug(payload)
    }

    /// Same as [Self::info].
    #[inline]
    pub fn i(&self, payload: &[&dyn Display]) {
        self.info(payload)
    }

    /// Same as [Self::success].
    #[inline]
    pub fn s(&self, payload: &[&dyn Display]) {
        self.success(payload)
    }

    /// Same as [Self::warn].
    #[inline]
    pub fn w(&self, payload: &[&dyn Display]) {
        self.warn(payload)
    }

    /// Same as [Self::error].
    #[inline]
    pub fn e(&self, payload: &[&dyn Display]) {
        self.error(payload)
    }

    /// Same as [Self::fail].
    #[inline]
    pub fn f(&self, payload: &[&dyn Display]) {
        self.fail(payload)
    }

    /// Same as [Self::raw].
    #[inline]
    pub fn r(&self, payload: &[&dyn Display]) {
        self.raw(payload)
    }

    /**
    A child logger labeled `self.label() + suffix`.

    Repeated calls with the same suffix return the same instance.

    ```
    let log = lablog::LoggerFactory::default().create("app");
    let db = log.sub(":db");
    assert_eq!(db.label(), "app:db");
    assert!(db.ptr_eq(&log.sub(":db")));
    assert!(!db.ptr_eq(&log.sub(":http")));
    ```
    */
    pub fn sub(&self, suffix: &str) -> Logger {
        self.inner.children.with_mut(|children| {
            if let Some(child) = children.get(suffix) {
                return child.clone();
            }
            let child = Logger::new(
                format!("{}{}", self.inner.label, suffix),
                self.inner.shared.clone(),
            );
            children.insert(suffix.to_string(), child.clone());
            child
        })
    }

    /// Whether both handles refer to the same logger instance.
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/*
Boilerplate notes.

PartialEq/Eq/Hash are by identity, not by label: two loggers built separately with the
same label are different loggers with different child caches.
Default makes no sense without a factory.
Display, no; the label is available via `label()`.
*/

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Logger {}

impl Hash for Logger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.inner.label)
            .field("flavor", &self.inner.shared.flavor)
            .finish_non_exhaustive()
    }
}
