//! # collection-gen-cli
//!
//! CLI library for generating Go collection helper functions.
//!
//! This crate provides the driver for the `gen-collection` tool: it turns
//! command-line flags and an optional `gen-collection.toml` into a
//! generation target, runs the [`collection_gen`] engine, and writes the
//! result.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`runner`] - Target generation and up-to-date checks
//! - [`writer`] - File output and dry-run support
//! - [`logging`] - `tracing` subscriber setup
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager, Target};
pub use error::{CliError, CliResult};
pub use writer::{FileWriter, Freshness};
