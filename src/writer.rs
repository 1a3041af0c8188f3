// SPDX-License-Identifier: MIT OR Apache-2.0

//! Writers: the terminal step of a log call.
//!
//! A [Writer] receives the final argument list followed by the caller's payload.
//! By default, dispatch writes to the platform console for the level's
//! [Destination]; a hook may replace the writer for a single call.
//!
//! [MemoryWriter] captures calls instead of printing them, which is what tests use.

use crate::hook::{Hook, HookOutcome};
use crate::level::Destination;
use std::fmt::{Debug, Display, Write as _};
use std::sync::{Arc, Mutex, PoisonError};

type WriteFn = dyn Fn(&[String], &[&dyn Display]) + Send + Sync;

/**
A shareable write function.

Cloning a writer is cheap; clones call the same function.
*/
#[derive(Clone)]
pub struct Writer(Arc<WriteFn>);

impl Writer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[String], &[&dyn Display]) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Calls the writer with the final args, then the payload.
    #[inline]
    pub fn write(&self, args: &[String], payload: &[&dyn Display]) {
        (self.0)(args, payload)
    }

    /// Whether both writers call the same function.
    pub fn ptr_eq(&self, other: &Writer) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Writer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Writer").field(&Arc::as_ptr(&self.0)).finish()
    }
}

/**
Joins args and payload with single spaces, the way a console joins its arguments.
*/
pub fn render_line(args: &[String], payload: &[&dyn Display]) -> String {
    let mut line = String::new();
    let args = args.iter().map(|a| a as &dyn Display);
    for (i, part) in args.chain(payload.iter().copied()).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        //writing to a String can't fail
        let _ = write!(line, "{}", part);
    }
    line
}

/**
Writes one line to the platform console.

On native targets `Warn` and `Error` go to stderr and everything else to stdout.
On wasm the matching `console.*` function is used.
*/
pub fn write_console(destination: Destination, args: &[String], payload: &[&dyn Display]) {
    let line = render_line(args, payload);
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::io::Write;
        fn write_line(mut out: impl Write, line: &str) {
            //a closed pipe shouldn't take the caller down with it
            let _ = out.write_all(line.as_bytes());
            let _ = out.write_all(b"\n");
        }
        match destination {
            Destination::Warn | Destination::Error => write_line(std::io::stderr().lock(), &line),
            Destination::Debug | Destination::Info | Destination::Log => {
                write_line(std::io::stdout().lock(), &line)
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        let msg = wasm_bindgen::JsValue::from(line);
        match destination {
            Destination::Debug => web_sys::console::debug_1(&msg),
            Destination::Info => web_sys::console::info_1(&msg),
            Destination::Warn => web_sys::console::warn_1(&msg),
            Destination::Error => web_sys::console::error_1(&msg),
            Destination::Log => web_sys::console::log_1(&msg),
        }
    }
}

/// The default writer for a destination, as a [Writer] value.
pub fn console_writer(destination: Destination) -> Writer {
    Writer::new(move |args, payload| write_console(destination, args, payload))
}

/**
A writer that stores every call in memory.

Each captured call is one `Vec<String>`: the final args followed by the rendered payload.

```
use lablog::{build_logger, Config, MemoryWriter};
use std::sync::Arc;

let capture = Arc::new(MemoryWriter::new());
let factory = build_logger(Config::new().hook(capture.hook()));
let log = factory.create("app");
log.warn(&[&"disk", &93]);

let calls = capture.drain();
assert_eq!(calls.len(), 1);
assert_eq!(calls[0][0], "[app]");
assert!(calls[0][1].contains("[WARN]"));
assert_eq!(&calls[0][2..], ["disk", "93"]);
```
*/
#[derive(Debug, Default)]
pub struct MemoryWriter {
    calls: Mutex<Vec<Vec<String>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one call.
    pub fn record(&self, args: &[String], payload: &[&dyn Display]) {
        let mut call: Vec<String> = args.to_vec();
        call.extend(payload.iter().map(|p| p.to_string()));
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    /// A [Writer] that records into this buffer.
    pub fn writer(self: &Arc<Self>) -> Writer {
        let this = self.clone();
        Writer::new(move |args, payload| this.record(args, payload))
    }

    /**
    A [Hook] that keeps the computed args and redirects every call into this buffer.
    */
    pub fn hook(self: &Arc<Self>) -> Hook {
        let writer = self.writer();
        Hook::new(move |_| HookOutcome::with_writer(writer.clone()))
    }

    /// Removes and returns every captured call, oldest first.
    pub fn drain(&self) -> Vec<Vec<String>> {
        std::mem::take(&mut *self.calls.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Removes every captured call and returns them as console lines joined by newlines.
    pub fn drain_lines(&self) -> String {
        self.drain()
            .iter()
            .map(|call| call.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Prints every captured call to the console log destination, clearing the buffer.
    pub fn drain_to_console(&self) {
        for call in self.drain() {
            write_console(Destination::Log, &call, &[]);
        }
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
