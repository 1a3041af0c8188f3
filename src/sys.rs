// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform time types.
//!
//! `Instant` comes from `std::time` natively and from `web_time` on wasm, where
//! `std::time::Instant::now` panics.  Used by [`timestamp_prefix`](crate::timestamp_prefix).

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
