//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve and publish the root directory
//! - `select`: Show the selected root directory without resolving links
//! - `validate`: Validate configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod resolve;
pub mod select;
pub mod validate;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use select::SelectCommand;
pub use validate::ValidateCommand;
