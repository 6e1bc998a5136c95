use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{CommentGuardError, Result};

use super::content::{is_binary, is_generated};

/// Path-level filtering used while walking the tree.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker should enter `dir`. Defaults to always.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Why a file was not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    SkipList,
    TestFile,
    Extension,
    Generated,
    Binary,
}

impl SkipReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SkipList => "skip list",
            Self::TestFile => "test file",
            Self::Extension => "extension",
            Self::Generated => "generated",
            Self::Binary => "binary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Check,
    Skip(SkipReason),
}

/// Result of [`EligibilityFilter::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// The file's content, ready to check.
    Check(Vec<u8>),
    Skip(SkipReason),
}

impl Eligibility {
    #[must_use]
    pub const fn is_check(self) -> bool {
        matches!(self, Self::Check)
    }
}

/// Decides which files are checked at all.
///
/// Name-based rules (skip list, test files, extensions) run during the walk through
/// [`FileFilter`]. Content rules (binary, generated) need the file bytes and run in
/// [`EligibilityFilter::check_content`].
#[derive(Debug, Clone)]
pub struct EligibilityFilter {
    skip_list: GlobSet,
    skip_tests: bool,
    test_patterns: GlobSet,
    extensions: Vec<String>,
}

impl EligibilityFilter {
    /// Build a filter from scanner settings.
    ///
    /// # Errors
    /// Returns an error if a skip-list entry or test pattern is not a valid glob.
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        Ok(Self {
            skip_list: build_glob_set(&config.effective_skip_list())?,
            skip_tests: config.skip_tests,
            test_patterns: build_glob_set(&config.test_patterns)?,
            extensions: config
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect(),
        })
    }

    fn in_skip_list(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.skip_list.is_match(name))
    }

    fn is_test_file(&self, path: &Path) -> bool {
        self.skip_tests
            && path
                .file_name()
                .is_some_and(|name| self.test_patterns.is_match(name))
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Apply the name-based rules to a file path.
    #[must_use]
    pub fn check_path(&self, path: &Path) -> Eligibility {
        if self.in_skip_list(path) {
            Eligibility::Skip(SkipReason::SkipList)
        } else if self.is_test_file(path) {
            Eligibility::Skip(SkipReason::TestFile)
        } else if !self.has_valid_extension(path) {
            Eligibility::Skip(SkipReason::Extension)
        } else {
            Eligibility::Check
        }
    }

    /// Apply the content rules to the bytes of a file.
    #[must_use]
    pub fn check_content(&self, content: &[u8]) -> Eligibility {
        if is_binary(content) {
            Eligibility::Skip(SkipReason::Binary)
        } else if is_generated(content) {
            Eligibility::Skip(SkipReason::Generated)
        } else {
            Eligibility::Check
        }
    }

    /// Apply every rule to a file on disk.
    ///
    /// The bytes read for the content rules are handed back so the file is read once.
    ///
    /// # Errors
    /// Returns `FileRead` if the content rules cannot read the file.
    pub fn evaluate(&self, path: &Path) -> Result<Candidate> {
        if let Eligibility::Skip(reason) = self.check_path(path) {
            return Ok(Candidate::Skip(reason));
        }

        let content = std::fs::read(path).map_err(|source| CommentGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(match self.check_content(&content) {
            Eligibility::Check => Candidate::Check(content),
            Eligibility::Skip(reason) => Candidate::Skip(reason),
        })
    }
}

impl FileFilter for EligibilityFilter {
    fn should_include(&self, path: &Path) -> bool {
        let eligibility = self.check_path(path);
        if let Eligibility::Skip(reason) = eligibility {
            tracing::debug!("skipping {} ({})", path.display(), reason.as_str());
        }
        eligibility.is_check()
    }

    fn should_descend(&self, dir: &Path) -> bool {
        let descend = !self.in_skip_list(dir);
        if !descend {
            tracing::debug!("skipping directory {}", dir.display());
        }
        descend
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| CommentGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| CommentGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
