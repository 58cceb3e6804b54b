use std::path::PathBuf;

use thiserror::Error;

/// Failure to load grid settings from disk
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read grid settings from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse grid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid grid settings: {0}")]
    Invalid(String),
}
