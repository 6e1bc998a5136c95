use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::comment::{CommentClusterer, classify_line};
use crate::error::{CommentGuardError, Result};

use super::{BlockAuditor, DiagnosticSink};

/// Scans a stream line by line and reports comment style defects.
///
/// Lines matching the optional exclusion pattern are dropped before classification and
/// behave like non-comment lines: they close the pending cluster.
#[derive(Debug, Default, Clone)]
pub struct CommentChecker {
    exclude: Option<Regex>,
    auditor: BlockAuditor,
}

impl CommentChecker {
    #[must_use]
    pub const fn new(exclude: Option<Regex>) -> Self {
        Self {
            exclude,
            auditor: BlockAuditor::new(),
        }
    }

    /// Compile the exclusion pattern and build a checker.
    ///
    /// An empty pattern means no exclusion.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn with_pattern(pattern: Option<&str>) -> Result<Self> {
        let exclude = match pattern.filter(|p| !p.is_empty()) {
            Some(p) => Some(Regex::new(p).map_err(|source| {
                CommentGuardError::InvalidExcludePattern {
                    pattern: p.to_string(),
                    source,
                }
            })?),
            None => None,
        };
        Ok(Self::new(exclude))
    }

    fn is_excluded(&self, raw: &str) -> bool {
        self.exclude.as_ref().is_some_and(|re| re.is_match(raw))
    }

    /// Check every line of `reader`, labelling diagnostics with `path`.
    ///
    /// `path` is only used in diagnostic text. Returns the number of diagnostics emitted.
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or a line is not valid UTF-8. Diagnostics
    /// emitted before the failure stay in the sink.
    pub fn check_reader<R, S>(&self, reader: R, path: &Path, sink: &mut S) -> Result<usize>
    where
        R: BufRead,
        S: DiagnosticSink + ?Sized,
    {
        let mut clusterer = CommentClusterer::new();
        let mut emitted = 0;

        for (index, line_result) in reader.lines().enumerate() {
            let raw = line_result?;
            let position = index + 1;

            let comment = if self.is_excluded(&raw) {
                None
            } else {
                classify_line(position, &raw)
            };

            let closed = match comment {
                Some(line) => clusterer.push(line),
                None => clusterer.close(),
            };
            if let Some(cluster) = closed {
                emitted += self.auditor.audit(&cluster, path, sink)?;
            }
        }

        if let Some(cluster) = clusterer.finish() {
            emitted += self.auditor.audit(&cluster, path, sink)?;
        }

        Ok(emitted)
    }

    /// Open `path` and check it. The file is closed on every return path.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be opened, or the error of `check_reader`.
    pub fn check_file<S>(&self, path: &Path, sink: &mut S) -> Result<usize>
    where
        S: DiagnosticSink + ?Sized,
    {
        let file = File::open(path).map_err(|source| CommentGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        self.check_reader(BufReader::new(file), path, sink)
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
