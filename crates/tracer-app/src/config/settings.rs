//! Settings loader for ~/.tracer.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use tracer_core::prelude::*;
use tracer_core::PatternSet;

const CONFIG_FILENAME: &str = ".tracer.toml";

/// The documented default configuration, printed by `--print-config`.
///
/// Parsing this text yields exactly `Settings::default()`.
pub const DEFAULT_CONFIG: &str = r#"# tracer configuration
# Location: ~/.tracer.toml (override with --config PATH)

[general]
highlight_errors = true          # colour flagged lines when echoing during ingest
error_color = "\u001b[0;31m"     # escape sequence written before a flagged line

# Browse colours: black, blue, cyan, green, magenta, red, white, yellow
background_color = "black"
foreground_color = "white"
background_inverted_color = "white"
foreground_inverted_color = "black"
background_error_highlight_color = "black"
foreground_error_highlight_color = "cyan"

list_limit = 5000                # most recent blocks loaded for browsing

# name = regex; a block whose first line matches any of these is not stored
[exclude_patterns]
# health_checks = "healthcheck"

# name = regex; matching lines are highlighted in the detail pane
[highlight_patterns]
# our_code = 'com\.example\.'
"#;

/// Compiled pattern filters built from `Settings`
#[derive(Debug, Clone, Default)]
pub struct Filters {
    pub exclude: PatternSet,
    pub highlight: PatternSet,
}

impl Settings {
    /// Compile both pattern tables. A malformed pattern names its key.
    pub fn compile_filters(&self) -> Result<Filters> {
        let exclude = PatternSet::compile(&self.exclude_patterns)?;
        let highlight = PatternSet::compile(&self.highlight_patterns)?;
        debug!(
            "Compiled {} exclude and {} highlight patterns",
            exclude.len(),
            highlight.len()
        );
        Ok(Filters { exclude, highlight })
    }
}

/// `$HOME/.tracer.toml`, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILENAME))
}

/// Load settings.
///
/// An explicit path must exist. Without one, `~/.tracer.toml` is used when
/// present and built-in defaults otherwise. A file that exists but cannot be
/// read or parsed is an error in both cases.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            other => {
                debug!("No config file at {:?}, using defaults", other);
                return Ok(Settings::default());
            }
        },
    };

    parse_settings_file(&config_path)
}

fn parse_settings_file(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        warn!("Failed to read {:?}: {}", config_path, e);
        Error::config(format!("cannot read {}: {}", config_path.display(), e))
    })?;

    let settings: Settings = toml::from_str(&content).map_err(|e| {
        warn!("Failed to parse {:?}: {}", config_path, e);
        Error::config_invalid(format!("{}: {}", config_path.display(), e))
    })?;

    info!("Loaded settings from {:?}", config_path);
    Ok(settings)
}
