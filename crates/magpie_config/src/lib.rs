//! Parsing and validation of `magpie.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a
//! strongly-typed [`ProjectConfig`] naming the model to analyse and the
//! per-rule severity overrides.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
