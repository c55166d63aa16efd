//! Serialisable outline report for non-interactive use.
//!
//! `headzoom --outline` prints one report per document so scripts can see each heading's span
//! and breadcrumb path without opening the editor.

use crate::formats::Format;
use crate::heading::HeadingNode;
use crate::outline::Outline;
use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
/// Outline of one document.
pub struct OutlineReport {
    /// Source file.
    pub path: String,
    /// Every heading in document order.
    pub headings: Vec<HeadingEntry>,
}

#[derive(Serialize, Clone, Debug)]
/// One heading with its derived title and ancestor path.
pub struct HeadingEntry {
    #[serde(flatten)]
    /// Span and raw content.
    pub node: HeadingNode,
    /// Heading text without markers.
    pub title: String,
    /// Ancestor titles, outermost first.
    pub path: Vec<String>,
}

impl OutlineReport {
    #[must_use]
    /// Builds the report for `text` read from `path`.
    pub fn build(path: &str, text: &str, format: &dyn Format) -> Self {
        let outline = Outline::parse(text, format);
        let headings = outline
            .headings()
            .iter()
            .map(|node| HeadingEntry {
                node: node.clone(),
                title: format.title(&node.content).to_string(),
                path: outline
                    .path_by_header(node)
                    .iter()
                    .map(|h| format.title(&h.content).to_string())
                    .collect(),
            })
            .collect();

        Self {
            path: path.to_string(),
            headings,
        }
    }
}

#[cfg(test)]
#[path = "tests/report.rs"]
mod tests;
