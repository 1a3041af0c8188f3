// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variadic front-ends for the [Logger](crate::Logger) methods.
//!
//! Each macro takes a logger expression followed by any number of [Display](std::fmt::Display)
//! values, and forwards them in order as the payload:
//!
//! ```
//! let log = lablog::LoggerFactory::default().create("demo");
//! let attempts = 3;
//! lablog::warn!(log, "retrying after", attempts, "attempts");
//! lablog::w!(log, "same thing, shorter");
//! lablog::raw!(log);
//! ```
//!
//! The single-letter macros match the single-letter methods.

#[doc(hidden)]
#[macro_export]
macro_rules! __lablog_forward {
    ($method:ident, $logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.$method(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs the arguments at [Level::Debug](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => { $crate::__lablog_forward!(debug, $($t)*) };
}

/// Logs the arguments at [Level::Info](crate::Level::Info).
#[macro_export]
macro_rules! info {
    ($($t:tt)*) => { $crate::__lablog_forward!(info, $($t)*) };
}

/// Logs the arguments at [Level::Success](crate::Level::Success).
#[macro_export]
macro_rules! success {
    ($($t:tt)*) => { $crate::__lablog_forward!(success, $($t)*) };
}

/// Logs the arguments at [Level::Warn](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => { $crate::__lablog_forward!(warn, $($t)*) };
}

/// Logs the arguments at [Level::Error](crate::Level::Error).
#[macro_export]
macro_rules! error {
    ($($t:tt)*) => { $crate::__lablog_forward!(error, $($t)*) };
}

/// Logs the arguments at [Level::Fail](crate::Level::Fail).
#[macro_export]
macro_rules! fail {
    ($($t:tt)*) => { $crate::__lablog_forward!(fail, $($t)*) };
}

/// Writes the arguments untagged, see [Logger::raw](crate::Logger::raw).
#[macro_export]
macro_rules! raw {
    ($($t:tt)*) => { $crate::__lablog_forward!(raw, $($t)*) };
}

/// Short for [debug!](crate::debug).
#[macro_export]
macro_rules! d {
    ($($t:tt)*) => { $crate::__lablog_forward!(d, $($t)*) };
}

/// Short for [info!](crate::info).
#[macro_export]
macro_rules! i {
    ($($t:tt)*) => { $crate::__lablog_forward!(i, $($t)*) };
}

/// Short for [success!](crate::success).
#[macro_export]
macro_rules! s {
    ($($t:tt)*) => { $crate::__lablog_forward!(s, $($t)*) };
}

/// Short for [warn!](crate::warn).
#[macro_export]
macro_rules! w {
    ($($t:tt)*) => { $crate::__lablog_forward!(w, $($t)*) };
}

/// Short for [error!](crate::error).
#[macro_export]
macro_rules! e {
    ($($t:tt)*) => { $crate::__lablog_forward!(e, $($t)*) };
}

/// Short for [fail!](crate::fail).
#[macro_export]
macro_rules! f {
    ($($t:tt)*) => { $crate::__lablog_forward!(f, $($t)*) };
}

/// Short for [raw!](crate::raw).
#[macro_export]
macro_rules! r {
    ($($t:tt)*) => { $crate::__lablog_forward!(r, $($t)*) };
}
