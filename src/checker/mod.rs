mod audit;
mod diagnostic;
mod process;

pub use audit::{BlockAuditor, TERMINAL_PUNCTUATION, has_double_space, is_punctuated};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use process::CommentChecker;

use crate::error::Result;

/// Append-only destination for diagnostics.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    ///
    /// # Errors
    /// Returns an error if the diagnostic cannot be recorded.
    fn emit(&mut self, diagnostic: Diagnostic) -> Result<()>;
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) -> Result<()> {
        self.push(diagnostic);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
