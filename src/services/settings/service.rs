use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::GridSettings;

use super::error::SettingsError;

const SETTINGS_FILE: &str = "grid.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `grid.toml` inside the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "KenBoyle", "RustCalendar")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Service for the file at `default_path()`
    pub fn from_default_location() -> Option<Self> {
        Self::default_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the settings file
    pub fn load(&self) -> Result<GridSettings, SettingsError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;

        let settings: GridSettings = toml::from_str(&text)?;
        settings.validate().map_err(SettingsError::Invalid)?;

        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(&self) -> GridSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load grid settings: {}, using defaults", e);
                GridSettings::default()
            }
        }
    }

    /// Write settings, creating the parent directory when needed
    pub fn save(&self, settings: &GridSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));
        let settings = GridSettings {
            slot_minutes: 15,
            default_duration_minutes: 60,
            drag_extension_minutes: 15,
        };

        service.save(&settings).unwrap();
        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_default_location_uses_grid_file() {
        if let Some(service) = SettingsService::from_default_location() {
            assert_eq!(service.path().file_name().unwrap(), SETTINGS_FILE);
            assert_eq!(Some(service.path().to_path_buf()), SettingsService::default_path());
        }
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "slot_minutes = 60\n").unwrap();

        let settings = SettingsService::new(path).load().unwrap();
        assert_eq!(settings.slot_minutes, 60);
        assert_eq!(settings.default_duration_minutes, 30);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("absent.toml"));

        assert!(matches!(service.load(), Err(SettingsError::Io { .. })));
        assert_eq!(service.load_or_default(), GridSettings::default());
    }

    #[test]
    fn test_invalid_slot_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "slot_minutes = 7\n").unwrap();
        let service = SettingsService::new(path);

        assert!(matches!(service.load(), Err(SettingsError::Invalid(_))));
        assert!(service.save(&service.load_or_default()).is_ok());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "slot_minutes = \"thirty\"").unwrap();

        assert!(matches!(
            SettingsService::new(path).load(),
            Err(SettingsError::Parse(_))
        ));
    }
}
