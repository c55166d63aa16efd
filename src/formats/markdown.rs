//! Markdown format implementation.
//!
//! Recognises ATX-style headings (`#` syntax) with the plain line rule, so fenced code blocks
//! are not special-cased.

use crate::formats::Format;

/// ATX-style markdown headings (`#` syntax).
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn marker(&self) -> char {
        '#'
    }
}
