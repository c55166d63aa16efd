//! Breadcrumb navigation shown above a zoomed section.
//!
//! The breadcrumb is a left-to-right chain of labels: the document title first, then each
//! ancestor heading of the zoomed section. Activating a label either leaves zoom (document title)
//! or re-zooms onto that ancestor.

use crate::formats::Format;
use crate::heading::HeadingNode;

/// What activating a crumb does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrumbTarget {
    /// Leave zoom entirely.
    Root,
    /// Zoom into the heading starting at this line.
    Heading(usize),
}

/// One clickable breadcrumb label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    /// Rendered text.
    pub label: String,
    /// Action on activation.
    pub target: CrumbTarget,
}

/// Rendered ancestor path of the zoomed heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    crumbs: Vec<Crumb>,
    separator: String,
}

impl Breadcrumb {
    #[must_use]
    /// Builds the chain from the document title and the ancestor path (outermost first).
    ///
    /// Headings with an empty title get `untitled` as their label so they stay clickable.
    pub fn build(
        root_label: &str,
        path: &[&HeadingNode],
        format: &dyn Format,
        separator: &str,
        untitled: &str,
    ) -> Self {
        let root = Crumb {
            label: root_label.to_string(),
            target: CrumbTarget::Root,
        };
        let ancestors = path.iter().map(|h| {
            let title = format.title(&h.content);
            Crumb {
                label: if title.is_empty() {
                    untitled.to_string()
                } else {
                    title.to_string()
                },
                target: CrumbTarget::Heading(h.start_line),
            }
        });

        Self {
            crumbs: std::iter::once(root).chain(ancestors).collect(),
            separator: separator.to_string(),
        }
    }

    #[must_use]
    /// All crumbs, root first.
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    #[must_use]
    /// Labels of the ancestor crumbs, without the root.
    pub fn path_labels(&self) -> Vec<&str> {
        self.crumbs[1..].iter().map(|c| c.label.as_str()).collect()
    }

    #[must_use]
    /// Separator drawn between labels.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    /// Full rendered text of the breadcrumb.
    pub fn text(&self) -> String {
        self.crumbs
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    #[must_use]
    /// The crumb drawn at character `column` of [`Breadcrumb::text`], if any.
    ///
    /// Separators are not clickable.
    pub fn hit_test(&self, column: usize) -> Option<&Crumb> {
        let sep_width = self.separator.chars().count();
        let mut start = 0;
        for crumb in &self.crumbs {
            let end = start + crumb.label.chars().count();
            if (start..end).contains(&column) {
                return Some(crumb);
            }
            start = end + sep_width;
        }
        None
    }
}

#[cfg(test)]
#[path = "tests/breadcrumb.rs"]
mod tests;
