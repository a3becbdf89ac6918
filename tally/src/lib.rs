//! Offline tallies over concurrency-testing run logs.
//!
//! Run logs live under a results root, one subdirectory per batch, with file
//! names of the form `<prefix>--<bench-1>--<bench-2>--<algorithm>--<run>`.
//! The crate follows a strict split:
//!
//! - **[`core`]**: Pure logic (name decoding, execution scanning, tallies).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Filesystem access (corpus discovery, config loading).
//!
//! [`report`] coordinates the two and [`render`] turns the result into text
//! or JSON.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
