//! sigproof CLI library — batch orchestration, request loading and reporting.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod batch;
/// CLI subcommand implementations.
pub mod commands;
/// CLI configuration — read/write `~/.sigproof/config.toml`.
pub mod config;
pub mod loader;
pub mod summary;
