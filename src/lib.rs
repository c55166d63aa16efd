//! headzoom: zoom into a heading's section of an outline document.
//!
//! The outline model parses a document into headings with their section spans and ancestor
//! paths. The zoom controller uses it to hide everything outside one section, keep cursor and
//! edits inside the visible window, and show a breadcrumb back out.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod breadcrumb;
pub mod config;
pub mod document;
pub mod formats;
pub mod heading;
pub mod input;
pub mod outline;
pub mod report;
pub mod surface;
pub mod ui;
pub mod zoom;
