//! Where configuration files are looked up, behind a trait so the loader can run
//! against an in-memory tree in tests.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read access to the locations a configuration file may live in.
pub trait FileSystem {
    /// Contents of `path`, or `None` when nothing is there.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    fn read_if_present(&self, path: &Path) -> std::io::Result<Option<String>>;

    /// Directory searched for the project-local file.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user directory: `~/.config/comment-guard` on Linux,
    /// `~/Library/Application Support/comment-guard` on macOS,
    /// `%APPDATA%\comment-guard` on Windows.
    fn user_config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_if_present(&self, path: &Path) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "comment-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
