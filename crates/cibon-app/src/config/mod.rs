//! Configuration file parsing for Cibon
//!
//! Settings live in `~/.config/cibon/config.toml` unless a path is given on
//! the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, read_settings};
pub use types::*;
