use serde::{Deserialize, Serialize};

/// Directory name that `vendor = true` removes from the skip list.
pub const VENDOR_DIR: &str = "vendor";

/// Root of `.comment-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

/// File discovery settings: which paths are checked at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// File or directory names (globs allowed) skipped anywhere in the tree.
    #[serde(default = "default_skip_list")]
    pub skip_list: Vec<String>,

    /// Check files under `vendor` even when it is in the skip list.
    #[serde(default)]
    pub vendor: bool,

    /// Only check files with these extensions. Empty means every text file.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Skip files matching `test_patterns`.
    #[serde(default)]
    pub skip_tests: bool,

    /// File name globs identifying test files.
    #[serde(default = "default_test_patterns")]
    pub test_patterns: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            skip_list: default_skip_list(),
            vendor: false,
            extensions: Vec::new(),
            skip_tests: false,
            test_patterns: default_test_patterns(),
        }
    }
}

impl ScannerConfig {
    /// Skip list with `vendor` removed when `vendor` is enabled.
    #[must_use]
    pub fn effective_skip_list(&self) -> Vec<String> {
        self.skip_list
            .iter()
            .filter(|name| !(self.vendor && name.as_str() == VENDOR_DIR))
            .cloned()
            .collect()
    }
}

/// Line-level settings applied while reading each file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Regex; matching lines are ignored as if they were not comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

fn default_skip_list() -> Vec<String> {
    [".git", "target", "node_modules", VENDOR_DIR]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_test_patterns() -> Vec<String> {
    ["*_test.go", "*_test.rs", "*_tests.rs"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
