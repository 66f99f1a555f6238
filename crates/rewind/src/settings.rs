//! Console settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the current entry of the move list is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// ANSI bold escape codes.
    #[default]
    Bold,
    /// A leading `>` marker, for terminals without escape support.
    Marker,
}

/// User-configurable console preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Highlight style for the current move.
    highlight: Highlight,

    /// Show the index of each empty square on the board.
    show_indices: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight: Highlight::default(),
            show_indices: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Settings with a different highlight style.
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(highlight = ?settings.highlight, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` when given, else `default_path` if it exists, else defaults.
    ///
    /// An explicitly requested file must exist.
    #[instrument(skip_all)]
    pub fn resolve(path: Option<&Path>, default_path: &Path) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
