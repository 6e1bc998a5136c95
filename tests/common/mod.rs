#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the comment-guard binary.
#[macro_export]
macro_rules! comment_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("comment-guard"))
    };
}

/// The checked-in sample with known comment problems.
pub const BAD_COMMENTS: &str = include_str!("../fixtures/bad_comments.go");

/// Expected text output for `BAD_COMMENTS` saved as `bad.go`.
pub const BAD_COMMENTS_OUTPUT: &str = "\
bad.go:6: double space typo in comment
bad.go:8: double space typo in comment
bad.go:12: missing punctuation at end of comment
bad.go:14: missing punctuation at end of comment
bad.go:20: double space typo in comment
bad.go:21: double space typo in comment
bad.go:25: missing punctuation at end of comment
bad.go:31: double space typo in comment
";

pub const CLEAN_GO: &str = "package main\n\n// Main runs the program.\nfunc main() {}\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a file with raw bytes in the temp directory.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.comment-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".comment-guard.toml", content);
    }

    /// Writes a Go file whose only comment lacks punctuation.
    pub fn create_unpunctuated_go(&self, relative_path: &str) {
        self.create_file(relative_path, "package x\n\n// no period here\n");
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
