//! The outline model turns document text into an ordered list of headings.
//!
//! Parsing is a pure function of the current text. Callers re-parse on every navigation event
//! instead of keeping a live tree, so there is no incremental state that could drift from the
//! document.

use crate::formats::Format;
use crate::heading::HeadingNode;

/// Headings of one text snapshot in document order.
#[derive(Clone, Debug, Default)]
pub struct Outline {
    headings: Vec<HeadingNode>,
    last_line: usize,
}

impl Outline {
    #[must_use]
    /// Parses `text` into headings, computing each heading's section span.
    ///
    /// A heading's section ends just before the next heading of equal or shallower level, or at
    /// the document's last line when no such heading follows.
    pub fn parse(text: &str, format: &dyn Format) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let last_line = lines.len() - 1;

        let mut headings: Vec<HeadingNode> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                format.heading_level(line).map(|level| HeadingNode {
                    start_line: i,
                    end_line: last_line,
                    level,
                    content: (*line).to_string(),
                })
            })
            .collect();

        for i in 0..headings.len() {
            let level = headings[i].level;
            let next = headings[i + 1..].iter().find(|h| h.level <= level);
            if let Some(end) = next.map(|h| h.start_line - 1) {
                headings[i].end_line = end;
            }
        }

        Self {
            headings,
            last_line,
        }
    }

    #[must_use]
    /// All headings, ordered by start line.
    pub fn headings(&self) -> &[HeadingNode] {
        &self.headings
    }

    #[must_use]
    /// Index of the document's last line.
    pub fn last_line(&self) -> usize {
        self.last_line
    }

    #[must_use]
    /// Whether the document has no headings at all.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    #[must_use]
    /// The heading whose marker line is exactly `line`.
    pub fn header_by_start_line(&self, line: usize) -> Option<&HeadingNode> {
        self.headings
            .binary_search_by_key(&line, |h| h.start_line)
            .ok()
            .map(|i| &self.headings[i])
    }

    #[must_use]
    /// The nearest heading at or above `line`, found by walking upward.
    pub fn enclosing_heading(&self, line: usize) -> Option<&HeadingNode> {
        let after = self.headings.partition_point(|h| h.start_line <= line);
        after.checked_sub(1).map(|i| &self.headings[i])
    }

    #[must_use]
    /// Ancestors of `node` from the outermost down to its immediate parent.
    ///
    /// Walks the preceding headings nearest-first and stops at the first one whose level is at
    /// or above the node's depth. That heading and everything before it belong to a sibling or
    /// higher branch, so a node right after a sibling has an empty path.
    pub fn path_by_header(&self, node: &HeadingNode) -> Vec<&HeadingNode> {
        let before = self.headings.partition_point(|h| h.start_line < node.start_line);

        let mut path: Vec<&HeadingNode> = self.headings[..before]
            .iter()
            .rev()
            .take_while(|h| h.level < node.level)
            .collect();
        path.reverse();
        path
    }
}

#[must_use]
/// Shorthand for [`Outline::parse`] returning just the headings.
pub fn headings(text: &str, format: &dyn Format) -> Vec<HeadingNode> {
    Outline::parse(text, format).headings
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
