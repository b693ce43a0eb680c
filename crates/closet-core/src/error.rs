use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClosetError {
    #[error("Invalid category: '{input}' - category name must not be empty")]
    InvalidCategory { input: String },

    #[error("Path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("No pending image to categorize")]
    NoPendingImage,

    #[error("No outfit to save - generate a complete outfit first")]
    NothingToSave,

    #[error("Saved outfit not found: #{index}")]
    SavedOutfitNotFound { index: usize },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, ClosetError>;

impl ClosetError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PathNotFound { .. } => 2,
            Self::InvalidCategory { .. } => 3,
            Self::ConfigKeyNotFound { .. } | Self::ConfigParse { .. } => 4,
            Self::NoPendingImage | Self::NothingToSave => 5,
            Self::SavedOutfitNotFound { .. } => 6,
            _ => 1,
        }
    }
}
