/// Line comment marker. Block comments and other markers are not recognized.
pub const COMMENT_MARKER: &str = "//";

/// A physical line confirmed to be a line comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    /// 1-based line number in the source.
    pub position: usize,
    /// Whitespace-trimmed text, marker included.
    pub text: String,
}

impl CommentLine {
    #[must_use]
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Classify one raw line. Returns the trimmed comment line, or `None` for anything else.
#[must_use]
pub fn classify_line(position: usize, raw: &str) -> Option<CommentLine> {
    let trimmed = raw.trim();
    trimmed
        .starts_with(COMMENT_MARKER)
        .then(|| CommentLine::new(position, trimmed))
}
