//! Headings introduced by an arbitrary marker character.
//!
//! Lets `headzoom.toml` pick another marker (`*` for org-style outlines, `=` and so on) while
//! keeping the same marker-count level rule.

use crate::formats::Format;

/// Headings made of a configurable marker character.
#[derive(Clone, Copy, Debug)]
pub struct MarkerFormat(pub char);

impl MarkerFormat {
    #[must_use]
    /// Builds a format from the first character of `marker`, if any.
    pub fn from_marker(marker: &str) -> Option<Self> {
        marker.chars().next().filter(|c| !c.is_whitespace()).map(Self)
    }
}

impl Format for MarkerFormat {
    fn marker(&self) -> char {
        self.0
    }
}
