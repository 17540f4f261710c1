//! Durable display preferences.
//!
//! Preferences live in a small JSON object on disk, the terminal counterpart
//! of browser local storage. Only the theme is stored, under a fixed key.
//! Unknown keys are preserved when writing.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sebastian_clothes_core::Theme;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Key of the theme entry.
pub const THEME_KEY: &str = "sebastianclothes.theme";

/// Errors reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file {path} is not a JSON object: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Preference file handle.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store backed by the file at `path`. Nothing is read until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme.
    ///
    /// A missing file, a missing key or a value other than `light`/`dark`
    /// all yield the default theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn theme(&self) -> Result<Theme, PreferenceError> {
        let entries = self.load()?;
        let theme = match entries.get(THEME_KEY) {
            None => Theme::default(),
            Some(Value::String(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored theme");
                Theme::default()
            }),
            Some(other) => {
                warn!(value = %other, "ignoring stored theme");
                Theme::default()
            }
        };
        Ok(theme)
    }

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or written.
    pub fn set_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        let mut entries = self.load()?;
        entries.insert(THEME_KEY.to_string(), Value::String(theme.to_string()));
        self.save(&entries)?;
        debug!(%theme, path = %self.path.display(), "theme saved");
        Ok(())
    }

    /// Theme for a fresh session; falls back to the default when the file is
    /// unusable.
    #[must_use]
    pub fn theme_or_default(&self) -> Theme {
        self.theme().unwrap_or_else(|e| {
            warn!(error = %e, "could not read preferences");
            Theme::default()
        })
    }

    fn load(&self) -> Result<Map<String, Value>, PreferenceError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str(&content).map_err(|source| PreferenceError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &Map<String, Value>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| {
            PreferenceError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
