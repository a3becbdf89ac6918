//! Deterministic, pure logic for the execution tallies.
//!
//! Core modules must be free of I/O side effects. They operate on strings and
//! in-memory tables and return deterministic outputs suitable for tests.

pub mod execution;
pub mod run_name;
pub mod tally;
