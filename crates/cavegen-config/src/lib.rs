//! Configuration system for the cave terrain generator.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, SmoothingArg};
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, OutputConfig};
pub use error::ConfigError;
