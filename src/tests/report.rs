use super::OutlineReport;
use crate::formats::markdown::MarkdownFormat;

#[test]
fn test_report_lists_spans_and_paths() {
    let report = OutlineReport::build("notes.md", "# A\nx\n## B\ny\n## C\nz", &MarkdownFormat);
    assert_eq!(report.headings.len(), 3);
    assert_eq!(report.headings[1].title, "B");
    assert_eq!(report.headings[1].path, vec!["A".to_string()]);
    assert_eq!(report.headings[2].node.end_line, 5);
}

#[test]
fn test_report_json_shape() {
    let report = OutlineReport::build("notes.md", "# A\n## B", &MarkdownFormat);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["path"], "notes.md");
    let b = &json["headings"][1];
    assert_eq!(b["start_line"], 1);
    assert_eq!(b["end_line"], 1);
    assert_eq!(b["level"], 2);
    assert_eq!(b["content"], "## B");
    assert_eq!(b["title"], "B");
    assert_eq!(b["path"][0], "A");
}
