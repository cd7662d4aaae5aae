//! Configuration types for tracer
//!
//! Defines:
//! - `Settings` - Everything read from `~/.tracer.toml`
//! - `GeneralSettings` - Echo and browse options
//! - `ColorName` - Terminal colour names accepted by the browse theme

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,

    /// `name -> regex`, tested against the first line of each detected block
    #[serde(default)]
    pub exclude_patterns: BTreeMap<String, String>,

    /// `name -> regex`, tested against every line shown in the detail pane
    #[serde(default)]
    pub highlight_patterns: BTreeMap<String, String>,
}

/// `[general]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralSettings {
    /// Wrap flagged lines in `error_color` when echoing during ingest
    #[serde(default = "default_true")]
    pub highlight_errors: bool,

    /// Raw escape sequence written before a flagged line
    #[serde(default = "default_error_color")]
    pub error_color: String,

    #[serde(default = "default_background")]
    pub background_color: ColorName,

    #[serde(default = "default_foreground")]
    pub foreground_color: ColorName,

    #[serde(default = "default_foreground")]
    pub background_inverted_color: ColorName,

    #[serde(default = "default_background")]
    pub foreground_inverted_color: ColorName,

    #[serde(default = "default_background")]
    pub background_error_highlight_color: ColorName,

    #[serde(default = "default_error_highlight")]
    pub foreground_error_highlight_color: ColorName,

    /// Most recent blocks loaded into the browse list
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            highlight_errors: true,
            error_color: default_error_color(),
            background_color: default_background(),
            foreground_color: default_foreground(),
            background_inverted_color: default_foreground(),
            foreground_inverted_color: default_background(),
            background_error_highlight_color: default_background(),
            foreground_error_highlight_color: default_error_highlight(),
            list_limit: default_list_limit(),
        }
    }
}

/// The eight basic terminal colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

fn default_true() -> bool {
    true
}

fn default_error_color() -> String {
    "\x1b[0;31m".to_string()
}

fn default_background() -> ColorName {
    ColorName::Black
}

fn default_foreground() -> ColorName {
    ColorName::White
}

fn default_error_highlight() -> ColorName {
    ColorName::Cyan
}

fn default_list_limit() -> usize {
    5000
}
