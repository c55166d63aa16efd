//! Heading representation for outline documents.
//!
//! A heading marks the start of a nested section. Nodes are derived from the current text on
//! every query and never persisted, so they carry plain line coordinates rather than handles
//! into the document.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A heading line together with the inclusive line span of its section.
pub struct HeadingNode {
    /// Line index of the heading marker line.
    pub start_line: usize,
    /// Last line belonging to this heading's section (inclusive).
    pub end_line: usize,
    /// Count of leading marker characters (1 for top-level).
    pub level: usize,
    /// Verbatim text of the heading line.
    pub content: String,
}

impl HeadingNode {
    #[must_use]
    /// Whether `line` falls inside this heading's section.
    pub fn contains(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }

    #[must_use]
    /// Number of lines in the section, heading line included.
    pub fn span_len(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}
