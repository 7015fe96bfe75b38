//! Library exports for rootdir-cli.
//!
//! Exposes the CLI structure so the commands can be driven and inspected
//! outside the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
