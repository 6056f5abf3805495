//! Configuration models and loading for the aria assistant.
//!
//! This crate owns the config schema, the optional json5 config file
//! loader, and the environment overrides used by hosts at bootstrap.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading APIs.
pub use error::ConfigError;
/// File loader and environment override helpers.
pub use loader::{from_env, load_dotenv, load_file};
/// Configuration schema models.
pub use model::*;
