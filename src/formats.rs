//! Format trait and implementations for heading syntaxes.
//!
//! A heading is a line that starts with a block of one or more marker characters followed by
//! at least one whitespace character. The marker block length is the heading level. Formats
//! only differ in which character acts as the marker.

pub mod markdown;
pub mod marker;

/// Describes how heading lines are recognised in a document.
pub trait Format {
    /// The character whose repetition at line start forms a heading marker block.
    fn marker(&self) -> char;

    /// Heading level of `line`, or `None` if the line is not a heading.
    fn heading_level(&self, line: &str) -> Option<usize> {
        let marker = self.marker();
        let level = line.chars().take_while(|&c| c == marker).count();
        if level == 0 {
            return None;
        }
        // Marker chars are counted, not bytes, so skip by char.
        match line.chars().nth(level) {
            Some(c) if c.is_whitespace() => Some(level),
            _ => None,
        }
    }

    /// Whether `line` is a heading line.
    fn is_heading(&self, line: &str) -> bool {
        self.heading_level(line).is_some()
    }

    /// Heading text without its marker block and surrounding whitespace.
    fn title<'a>(&self, line: &'a str) -> &'a str {
        if self.is_heading(line) {
            line.trim_start_matches(self.marker()).trim()
        } else {
            line.trim()
        }
    }
}
