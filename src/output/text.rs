use std::fmt::Write;
use std::io::IsTerminal;

use crate::error::Result;

use super::{CheckReport, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

mod ansi {
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// One `<path>:<line>: <message>` line per diagnostic.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();

        for d in &report.diagnostics {
            if self.use_colors {
                writeln!(
                    output,
                    "{}{}:{}{}: {}{}{}",
                    ansi::CYAN,
                    d.path.display(),
                    d.line,
                    ansi::RESET,
                    ansi::YELLOW,
                    d.message(),
                    ansi::RESET
                )
                .ok();
            } else {
                writeln!(output, "{d}").ok();
            }
        }

        Ok(output)
    }
}
