use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommentGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid exclude pattern: {pattern}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CommentGuardError {
    /// Short category name, attached to per-file error logs.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidExcludePattern { .. } | Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }
}

pub type Result<T> = std::result::Result<T, CommentGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
