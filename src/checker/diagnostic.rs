use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The style defect a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    DoubleSpace,
    MissingPunctuation,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DoubleSpace => "double space typo in comment",
            Self::MissingPunctuation => "missing punctuation at end of comment",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One style violation anchored to a path and a 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, line: usize, kind: DiagnosticKind) -> Self {
        Self {
            path: path.into(),
            line,
            kind,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Renders as `<path>:<line>: <message>`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.kind)
    }
}
