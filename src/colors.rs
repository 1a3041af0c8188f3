// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
The styling table used by the host flavor.

Each level maps to one ANSI decoration.  The per-level functions are also handy for
coloring payload text to match, and [c] offers them under single-letter names:

```
use lablog::colors::{self, c};
assert_eq!(colors::warn("careful"), c::w("careful"));
```

Whether escape codes are actually emitted follows `colored`'s usual rules
(`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`), or [set_override].
*/

use crate::level::Level;
use colored::Colorize;

/// Decorates `text` with the style for `level`.
pub fn paint(level: Level, text: &str) -> String {
    match level {
        Level::Debug => text.magenta().to_string(),
        Level::Info => text.blue().to_string(),
        Level::Success => text.green().to_string(),
        Level::Warn => text.yellow().to_string(),
        Level::Error => text.red().to_string(),
        Level::Fail => text.red().bold().to_string(),
        Level::None => text.to_string(),
    }
}

pub fn debug(text: &str) -> String {
    paint(Level::Debug, text)
}

pub fn info(text: &str) -> String {
    paint(Level::Info, text)
}

pub fn success(text: &str) -> String {
    paint(Level::Success, text)
}

pub fn warn(text: &str) -> String {
    paint(Level::Warn, text)
}

pub fn error(text: &str) -> String {
    paint(Level::Error, text)
}

pub fn fail(text: &str) -> String {
    paint(Level::Fail, text)
}

/// Single-letter aliases for the per-level functions.
pub mod c {
    pub use super::debug as d;
    pub use super::error as e;
    pub use super::fail as f;
    pub use super::info as i;
    pub use super::success as s;
    pub use super::warn as w;
}

/// Forces styling on or off for the whole process, regardless of the environment.
pub fn set_override(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Returns styling to environment-based detection.
pub fn unset_override() {
    colored::control::unset_override();
}
