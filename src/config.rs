//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for a headzoom.toml in the working directory and load settings from it if present.
//! It picks the heading marker, how the breadcrumb is drawn, and which files a directory scan
//! picks up.

use facet::Facet;
use std::fs;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "headzoom.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from headzoom.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "#".to_string())]
    /// Character whose repetition at line start marks a heading.
    pub heading_marker: String,
    #[facet(default = " > ".to_string())]
    /// Text drawn between breadcrumb labels.
    pub breadcrumb_separator: String,
    #[facet(default = "\u{a0}".repeat(5))]
    /// Breadcrumb label for headings with an empty title.
    pub untitled_label: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Config {
    #[must_use]
    /// Load configuration from headzoom.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        fs::read_to_string(CONFIG_FILE)
            .ok()
            .and_then(|contents| Self::parse(&contents))
            .unwrap_or_else(Self::defaults)
    }

    #[must_use]
    /// Parses configuration text, `None` if it is not valid.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// The configuration with every field at its default.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn defaults() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
