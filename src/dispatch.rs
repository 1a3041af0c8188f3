// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-call pipeline.
//!
//! Every log call runs, in order:
//! 1. Resolve the configuration (exactly once, even if the call is then filtered).
//! 2. Compare the level against the threshold; stop here if it's suppressed.
//! 3. Build the args: prefix, `[label]`, `[LEVEL]`.
//! 4. Run the hook, which may replace the args and/or the writer.
//! 5. Call the writer with the final args followed by the payload.
//!
//! The writer runs last, so a panic in the provider, the prefix or the hook leaves
//! nothing written.

use crate::args::{base_args, level_tag};
use crate::config::{ConfigProvider, ResolvedConfig, resolve};
use crate::hook;
use crate::level::{Destination, Level};
use crate::writer::{Writer, write_console};
use std::fmt::Display;

/// The level the raw path filters at.
pub const RAW_LEVEL: Level = Level::Info;

/**
The deployment context a factory targets.

The two flavors have identical semantics and differ only in styling and defaults.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Plain level tags and the simple resolver.
    Console,
    /// Colored level tags, and the `DEBUG` environment variable lowers the default threshold.
    Host,
}

impl Flavor {
    /// The flavor for the current target: console on wasm, host elsewhere.
    pub const fn native() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Flavor::Console
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Flavor::Host
        }
    }

    pub const fn styled(self) -> bool {
        matches!(self, Flavor::Host)
    }
}

/// State shared by a factory and every logger it creates.
pub(crate) struct Shared {
    pub(crate) provider: Box<dyn ConfigProvider>,
    pub(crate) flavor: Flavor,
}

impl Shared {
    fn resolve(&self) -> ResolvedConfig {
        resolve(self.provider.as_ref())
    }
}

fn finish(writer: Option<Writer>, destination: Destination, args: &[String], payload: &[&dyn Display]) {
    match writer {
        Some(writer) => writer.write(args, payload),
        None => write_console(destination, args, payload),
    }
}

pub(crate) fn dispatch(shared: &Shared, label: &str, level: Level, payload: &[&dyn Display]) {
    let config = shared.resolve();
    if !config.log_level.allows(level) {
        return;
    }
    let mut args = base_args(&config, label);
    args.push(level_tag(level, shared.flavor.styled()));
    let (args, writer) = hook::apply(config.hook.as_ref(), args, level, label, false);
    finish(writer, level.destination(), &args, payload);
}

/**
Payload only: no prefix, label or level tag.

Filters at [RAW_LEVEL]; the hook still runs, with empty args.
*/
pub(crate) fn dispatch_raw(shared: &Shared, label: &str, payload: &[&dyn Display]) {
    let config = shared.resolve();
    if !config.log_level.allows(RAW_LEVEL) {
        return;
    }
    let (args, writer) = hook::apply(config.hook.as_ref(), Vec::new(), RAW_LEVEL, label, true);
    finish(writer, Destination::Log, &args, payload);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::writer::MemoryWriter;
    use std::sync::Arc;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    fn shared(config: Config, flavor: Flavor) -> Shared {
        Shared {
            provider: Box::new(config),
            flavor,
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn every_level_against_every_threshold() {
        let thresholds = [
            Level::Debug,
            Level::Info,
            Level::Success,
            Level::Warn,
            Level::Error,
            Level::Fail,
            Level::None,
        ];
        for threshold in thresholds {
            for level in Level::ALL {
                let capture = Arc::new(MemoryWriter::new());
                let shared = shared(
                    Config::new().log_level(threshold).hook(capture.hook()),
                    Flavor::Console,
                );
                dispatch(&shared, "t", level, &[&"p"]);
                let calls = capture.drain();
                if level.ordinal() >= threshold.ordinal() && threshold != Level::None {
                    assert_eq!(calls.len(), 1, "{:?} under {:?}", level, threshold);
                    assert_eq!(calls[0][1], format!("[{}]", level.tag()));
                } else {
                    assert!(calls.is_empty(), "{:?} under {:?}", level, threshold);
                }
            }
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn raw_skips_tags() {
        let capture = Arc::new(MemoryWriter::new());
        let shared = shared(
            Config::new()
                .prefix(crate::args::Prefix::new(|| "pre".to_string()))
                .hook(capture.hook()),
            Flavor::Host,
        );
        dispatch_raw(&shared, "t", &[&"a", &1]);
        assert_eq!(capture.drain(), vec![vec!["a", "1"]]);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn raw_is_filtered_like_info() {
        let capture = Arc::new(MemoryWriter::new());
        let shared = shared(
            Config::new().log_level(Level::Warn).hook(capture.hook()),
            Flavor::Console,
        );
        dispatch_raw(&shared, "t", &[&"a"]);
        assert!(capture.is_empty());
    }
}
