use super::CommentLine;

/// A run of comment lines at strictly consecutive positions.
///
/// Never empty: a cluster can only be created from its first line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    lines: Vec<CommentLine>,
}

impl Cluster {
    #[must_use]
    pub fn new(first: CommentLine) -> Self {
        Self { lines: vec![first] }
    }

    #[must_use]
    pub fn lines(&self) -> &[CommentLine] {
        &self.lines
    }

    #[must_use]
    pub fn last(&self) -> &CommentLine {
        &self.lines[self.lines.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`: a cluster holds at least one line.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `position` directly follows the last line of this cluster.
    #[must_use]
    pub fn continues_with(&self, position: usize) -> bool {
        self.last().position + 1 == position
    }

    fn push(&mut self, line: CommentLine) {
        debug_assert!(self.continues_with(line.position));
        self.lines.push(line);
    }
}

/// Groups a stream of comment lines into clusters.
///
/// Only comment lines are pushed; the positions of skipped lines show up as gaps.
#[derive(Debug, Default)]
pub struct CommentClusterer {
    pending: Option<Cluster>,
}

impl CommentClusterer {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Add a comment line. Returns the previous cluster if this line does not continue it.
    pub fn push(&mut self, line: CommentLine) -> Option<Cluster> {
        match self.pending.as_mut() {
            Some(cluster) if cluster.continues_with(line.position) => {
                cluster.push(line);
                None
            }
            _ => self.pending.replace(Cluster::new(line)),
        }
    }

    /// Close the pending cluster, if any.
    ///
    /// Called on a non-comment line as well as at end of input.
    pub const fn close(&mut self) -> Option<Cluster> {
        self.pending.take()
    }

    /// Consume the clusterer and return the last pending cluster.
    #[must_use]
    pub fn finish(mut self) -> Option<Cluster> {
        self.close()
    }
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
