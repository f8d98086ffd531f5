//! Configuration model for interview-qa.
//!
//! This module defines the Config struct that represents `interview-qa.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.
//! The file is read once at startup and never mutated afterwards.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::RoleOption;
