//! # Ladder
//!
//! Library half of the `ladder` binary: the HTTP API and the CLI, exposed
//! so integration tests can drive them without spawning a process.

pub mod api;
pub mod cli;
