//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# lablog

lablog is a small, embeddable logging facade: leveled, labeled lines, optionally colored,
with a hook that can rewrite or redirect any call.

# The levels

| Name    | Filters as | Written to      | Short |
|---------|------------|-----------------|-------|
| debug   | debug      | console debug   | `d`   |
| info    | info       | console info    | `i`   |
| success | info       | console info    | `s`   |
| warn    | warn       | console warn    | `w`   |
| error   | error      | console error   | `e`   |
| fail    | error      | console error   | `f`   |
| raw     | info       | console log     | `r`   |

`success` and `fail` keep their own tag text and color.  The threshold `none` suppresses
everything.

# The API

Build a factory from a configuration source, then create labeled loggers from it:

```rust
use lablog::{build_logger, Config, Level};

let factory = build_logger(Config::new().log_level(Level::Debug));
let log = factory.create("server");
log.info(&[&"listening on", &8080]);
lablog::d!(log, "a debug line");

let db = log.sub(":db");          // label "server:db"
assert!(db.ptr_eq(&log.sub(":db")));
```

A line is made of, in order: the prefix (if configured), `[label]`, `[LEVEL]`, then the
payload.  The example above prints `[server] [INFO] listening on 8080`.

# Configuration

The source is a static [Config] or a closure returning one.  It is consulted on every log
call and never cached, so a closure over shared state reconfigures live.  Fields left unset
fall back to [Config::defaults].  In the host flavor (native targets), setting the `DEBUG`
environment variable lowers the default threshold to `debug`; an explicit `log_level` still
wins.

# Hooks

A [Hook] sees the computed args, level and label of every call that passes filtering, and
returns a [HookOutcome] that may replace the args, the writer, or both:

```rust
use lablog::{build_console_logger, Config, Hook, HookOutcome, MemoryWriter};
use std::sync::Arc;

let capture = Arc::new(MemoryWriter::new());
let writer = capture.writer();
let factory = build_console_logger(Config::new().hook(Hook::new(move |_| {
    HookOutcome::with_args(["[custom-arg]"]).writer(writer.clone())
})));
factory.create("x").info(&[&"test"]);
assert_eq!(capture.drain(), vec![vec!["[custom-arg]", "test"]]);
```

# Failures

A panic in the configuration source, the prefix, or the hook unwinds out of the log call.
Nothing is written for that call.
*/

mod args;
pub mod colors;
pub mod config;
mod dispatch;
mod hook;
mod level;
mod logger;
mod macros;
mod spinlock;
mod sys;
mod writer;

pub use args::{Prefix, base_args, level_tag, timestamp_prefix};
pub use config::{Config, ConfigProvider, EnvDefaults, ResolvedConfig, resolve};
pub use dispatch::{Flavor, RAW_LEVEL};
pub use hook::{Hook, HookContext, HookOutcome};
pub use level::{Destination, Level, ParseLevelError};
pub use logger::{Logger, LoggerFactory, build_console_logger, build_host_logger, build_logger};
pub use writer::{MemoryWriter, Writer, console_writer, render_line, write_console};
