use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::models::settings::Settings;

/// Persists user settings as a small JSON file.
///
/// Read once at startup, written on every toggle. A missing file yields
/// defaults (light mode, USD); a present-but-corrupt file is an error so the
/// caller can decide whether to overwrite it.
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize settings to JSON bytes (for frontends that own file I/O).
    pub fn to_bytes(settings: &Settings) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec_pretty(settings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Deserialize settings from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Settings, CoreError> {
        serde_json::from_slice(bytes)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse settings: {e}")))
    }

    /// Load settings from disk. A missing file returns defaults.
    pub fn load(&self) -> Result<Settings, CoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings to disk, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, Self::to_bytes(settings)?)?;
        Ok(())
    }
}
