mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::{Diagnostic, DiagnosticKind};
use crate::error::Result;

/// Everything produced by one `check` run.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Files whose content was actually checked.
    pub files_scanned: usize,
    /// Diagnostics in path-then-line order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Trait for formatting check reports into various output formats.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &CheckReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
