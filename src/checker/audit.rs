use std::path::Path;

use crate::comment::Cluster;
use crate::error::Result;

use super::{Diagnostic, DiagnosticKind, DiagnosticSink};

/// Characters accepted at the end of a comment block.
///
/// Closing brackets count so that a block may end on a parenthesized remark.
/// Full-width and right-to-left punctuation is not recognized.
pub const TERMINAL_PUNCTUATION: [char; 6] = ['.', '!', '?', ')', ']', '}'];

const DOUBLE_SPACE: &str = "  ";

#[must_use]
pub fn has_double_space(text: &str) -> bool {
    text.contains(DOUBLE_SPACE)
}

#[must_use]
pub fn is_punctuated(text: &str) -> bool {
    text.ends_with(TERMINAL_PUNCTUATION)
}

/// Inspects finished comment clusters.
///
/// Every line is checked for double spaces. Only the last line of a cluster is checked
/// for terminal punctuation, and its punctuation diagnostic is emitted before its
/// double-space diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockAuditor;

impl BlockAuditor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Audit one cluster, sending diagnostics to `sink` in line order.
    ///
    /// Returns the number of diagnostics emitted.
    ///
    /// # Errors
    /// Returns an error if the sink fails to accept a diagnostic.
    pub fn audit<S: DiagnosticSink + ?Sized>(
        &self,
        cluster: &Cluster,
        path: &Path,
        sink: &mut S,
    ) -> Result<usize> {
        let last_position = cluster.last().position;
        let mut emitted = 0;

        for line in cluster.lines() {
            if line.position == last_position && !is_punctuated(&line.text) {
                sink.emit(Diagnostic::new(
                    path,
                    line.position,
                    DiagnosticKind::MissingPunctuation,
                ))?;
                emitted += 1;
            }

            if has_double_space(&line.text) {
                sink.emit(Diagnostic::new(path, line.position, DiagnosticKind::DoubleSpace))?;
                emitted += 1;
            }
        }

        Ok(emitted)
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
