//! Configuration file parsing for tracer
//!
//! Supports:
//! - `~/.tracer.toml` - Global settings and pattern tables
//! - `--config PATH` - Explicit override, which must exist

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, Filters, DEFAULT_CONFIG};
pub use types::*;
