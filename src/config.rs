//! Settings for the `statusflow` binary, loaded from `statusflow.toml`.
//!
//! Missing keys fall back to defaults. After loading, `NO_COLOR` and then
//! `STATUSFLOW_COLOR` override the file's `color` setting.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "statusflow.toml";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Top-level settings read from `statusflow.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusflowConfig {
    /// Colour badges and action lists in text output.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Text or JSON, when `--json` is not given.
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Log filter used when neither `--verbose` nor `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Colour is on by default; terminal detection still applies.
fn default_color() -> bool {
    true
}

// Human-readable text by default.
fn default_format() -> OutputFormat {
    OutputFormat::Text
}

// Only warnings unless asked otherwise.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StatusflowConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            format: default_format(),
            log_level: default_log_level(),
        }
    }
}

impl StatusflowConfig {
    /// Load `statusflow.toml` from the working directory, or defaults.
    ///
    /// Environment overrides are applied separately by [`apply_env`](Self::apply_env),
    /// once logging is up.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Apply `NO_COLOR` and `STATUSFLOW_COLOR` from the process environment.
    pub fn apply_env(&mut self) {
        let no_color = std::env::var("NO_COLOR").ok();
        let color = std::env::var("STATUSFLOW_COLOR").ok();
        self.apply_color_env(no_color.as_deref(), color.as_deref());
    }

    /// A non-empty `NO_COLOR` disables colour. A recognised
    /// `STATUSFLOW_COLOR` then wins over both the file and `NO_COLOR`.
    fn apply_color_env(&mut self, no_color: Option<&str>, color: Option<&str>) {
        if no_color.is_some_and(|value| !value.is_empty()) {
            self.color = false;
        }
        if let Some(value) = color {
            match parse_switch(value) {
                Some(enabled) => self.color = enabled,
                None => warn!(value, "ignoring unrecognised STATUSFLOW_COLOR"),
            }
        }
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = toml::from_str::<StatusflowConfig>(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

// Accepts the usual spellings of on and off.
fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "always" => Some(true),
        "0" | "false" | "no" | "never" => Some(false),
        _ => None,
    }
}
