mod classify;
mod cluster;

pub use classify::{COMMENT_MARKER, CommentLine, classify_line};
pub use cluster::{Cluster, CommentClusterer};
