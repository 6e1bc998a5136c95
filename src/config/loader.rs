use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{CommentGuardError, Result};

use super::{Config, FileSystem, RealFileSystem};

/// Produces the configuration a command runs with.
pub trait ConfigLoader {
    /// Search the standard locations, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if a found file cannot be read or is not a valid config.
    fn load(&self) -> Result<Config>;

    /// Load one specific file, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or not a valid config.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".comment-guard.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Looks for `.comment-guard.toml` in the working directory, then `config.toml` in the
/// user config directory. The first file found wins; the two are never merged.
#[derive(Debug, Default)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> {
        let local = self.fs.working_dir().map(|d| d.join(LOCAL_CONFIG_NAME));
        let user = self.fs.user_config_dir().map(|d| d.join(USER_CONFIG_NAME));
        local.into_iter().chain(user)
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        self.fs
            .read_if_present(path)
            .map_err(|source| CommentGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn parse(path: &Path, content: &str) -> Result<Config> {
        tracing::debug!("using configuration {}", path.display());
        Ok(toml::from_str(content)?)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        for path in self.candidates() {
            if let Some(content) = self.read(&path)? {
                return Self::parse(&path, &content);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        match self.read(path)? {
            Some(content) => Self::parse(path, &content),
            None => Err(CommentGuardError::FileRead {
                path: path.to_path_buf(),
                source: Error::from(ErrorKind::NotFound),
            }),
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
