use super::{Breadcrumb, CrumbTarget};
use crate::formats::markdown::MarkdownFormat;
use crate::outline::Outline;

fn crumbs_for(text: &str, line: usize) -> Breadcrumb {
    let outline = Outline::parse(text, &MarkdownFormat);
    let node = outline.header_by_start_line(line).unwrap();
    let path = outline.path_by_header(node);
    Breadcrumb::build("notes.md", &path, &MarkdownFormat, " > ", "-----")
}

#[test]
fn test_root_then_ancestors() {
    let bc = crumbs_for("# A\nx\n## B\ny\n### C\nz", 4);
    assert_eq!(bc.path_labels(), vec!["A", "B"]);
    assert_eq!(bc.crumbs()[0].target, CrumbTarget::Root);
    assert_eq!(bc.crumbs()[1].target, CrumbTarget::Heading(0));
    assert_eq!(bc.crumbs()[2].target, CrumbTarget::Heading(2));
    assert_eq!(bc.text(), "notes.md > A > B");
}

#[test]
fn test_top_level_heading_has_only_root() {
    let bc = crumbs_for("# A\nx", 0);
    assert!(bc.path_labels().is_empty());
    assert_eq!(bc.text(), "notes.md");
}

#[test]
fn test_empty_title_uses_placeholder() {
    let bc = crumbs_for("# \n## B", 1);
    assert_eq!(bc.path_labels(), vec!["-----"]);
}

#[test]
fn test_hit_test_by_column() {
    // "notes.md > A > B"
    let bc = crumbs_for("# A\nx\n## B\ny\n### C\nz", 4);
    assert_eq!(bc.hit_test(0).unwrap().target, CrumbTarget::Root);
    assert_eq!(bc.hit_test(7).unwrap().target, CrumbTarget::Root);
    assert!(bc.hit_test(8).is_none());
    assert!(bc.hit_test(10).is_none());
    assert_eq!(bc.hit_test(11).unwrap().target, CrumbTarget::Heading(0));
    assert_eq!(bc.hit_test(15).unwrap().target, CrumbTarget::Heading(2));
    assert!(bc.hit_test(16).is_none());
}
