use super::{TextDocument, Viewport};
use crate::surface::{Change, Position, ScreenPoint, Selection, Surface};

fn doc(text: &str) -> TextDocument {
    TextDocument::new("doc.md", text)
}

#[test]
fn test_lines_and_text() {
    let d = doc("# A\nx\n");
    assert_eq!(d.line_count(), 3);
    assert_eq!(d.line(0), Some("# A"));
    assert_eq!(d.line(2), Some(""));
    assert_eq!(d.line(3), None);
    assert_eq!(d.text(), "# A\nx\n");
    assert_eq!(d.last_line(), 2);
    assert_eq!(TextDocument::new("empty", "").line_count(), 1);
}

#[test]
fn test_surface_ids_are_unique() {
    assert_ne!(doc("a").id(), doc("a").id());
}

#[test]
fn test_insert_within_line() {
    let mut d = doc("hello\nworld");
    let end = d.apply_change(&Change::insert(Position::new(0, 5), ", there"));
    assert_eq!(d.line(0), Some("hello, there"));
    assert_eq!(end, Position::new(0, 12));
    assert!(d.is_modified());
}

#[test]
fn test_insert_newline_splits_line() {
    let mut d = doc("abcd\nz");
    let end = d.apply_change(&Change::insert(Position::new(0, 2), "\n"));
    assert_eq!(d.text(), "ab\ncd\nz");
    assert_eq!(end, Position::new(1, 0));
}

#[test]
fn test_delete_joins_lines() {
    let mut d = doc("ab\ncd\nef");
    let end = d.apply_change(&Change::delete(Position::new(0, 2), Position::new(1, 0)));
    assert_eq!(d.text(), "abcd\nef");
    assert_eq!(end, Position::new(0, 2));
}

#[test]
fn test_multibyte_columns() {
    let mut d = doc("héllo");
    d.apply_change(&Change::insert(Position::new(0, 2), "X"));
    assert_eq!(d.line(0), Some("héXllo"));
    assert_eq!(d.line_len(0), 6);
}

#[test]
fn test_full_replace() {
    let mut d = doc("# A\nx\n## B");
    let change = Change::set_value(&d, "new\ntext");
    assert!(change.is_full_replace(&d));
    d.apply_change(&change);
    assert_eq!(d.text(), "new\ntext");

    let partial = Change {
        to: Position::new(0, 1),
        ..Change::set_value(&d, "z")
    };
    assert!(!partial.is_full_replace(&d));
    assert!(!Change::insert(Position::new(0, 0), "q").is_full_replace(&d));
}

#[test]
fn test_anchors_follow_edits() {
    let mut d = doc("a\nb\nc\nd");
    let on_c = d.anchor_line(2);
    let on_a = d.anchor_line(0);

    d.apply_change(&Change::insert(Position::new(1, 0), "new\n"));
    assert_eq!(d.anchor_position(on_c), Some(3));
    assert_eq!(d.anchor_position(on_a), Some(0));

    // Deleting the anchored line orphans the anchor.
    d.apply_change(&Change::delete(Position::new(2, 1), Position::new(3, 1)));
    assert_eq!(d.text(), "a\nnew\nb\nd");
    assert_eq!(d.anchor_position(on_c), None);

    d.release_anchor(on_a);
    assert_eq!(d.anchor_position(on_a), None);
    assert_eq!(d.anchor_count(), 1);
}

#[test]
fn test_anchor_survives_full_replace_by_position() {
    let mut d = doc("a\nb\nc\nd");
    let anchor = d.anchor_line(2);
    d.apply_change(&Change::set_value(&d, "1\n2\n3"));
    assert_eq!(d.anchor_position(anchor), Some(2));

    d.apply_change(&Change::set_value(&d, "only"));
    assert_eq!(d.anchor_position(anchor), None);
}

#[test]
fn test_hidden_marks_follow_lines() {
    let mut d = doc("a\nb\nc");
    d.set_line_hidden(0, true);
    d.set_line_hidden(0, true);
    d.set_line_hidden(9, true);
    assert!(d.is_line_hidden(0));
    assert!(!d.is_line_hidden(9));

    d.apply_change(&Change::insert(Position::new(1, 1), "\nb2"));
    assert!(d.is_line_hidden(0));
    assert!(!d.is_line_hidden(1));
    assert!(!d.is_line_hidden(2));
    let visible: Vec<usize> = d.visible_lines().map(|(i, _)| i).collect();
    assert_eq!(visible, vec![1, 2, 3]);
    assert_eq!(d.visible_row(3), Some(2));
    assert_eq!(d.visible_row(0), None);
}

#[test]
fn test_selections_are_clamped_to_document() {
    let mut d = doc("ab\ncd");
    d.set_selections(vec![Selection {
        anchor: Position::new(0, 1),
        head: Position::new(7, 9),
    }]);
    assert_eq!(d.cursor(), Position::new(1, 2));
    d.set_selections(Vec::new());
    assert_eq!(d.selections(), vec![Selection::default()]);
}

#[test]
fn test_position_at_maps_visible_rows() {
    let mut d = doc("zero\none\ntwo\nthree");
    d.set_viewport(Viewport {
        x: 2,
        y: 1,
        width: 20,
        height: 5,
        scroll: 0,
    });
    d.set_line_hidden(0, true);

    assert_eq!(
        d.position_at(ScreenPoint { x: 4, y: 1 }),
        Some(Position::new(1, 2))
    );
    // Columns past the end clamp to line end.
    assert_eq!(
        d.position_at(ScreenPoint { x: 19, y: 2 }),
        Some(Position::new(2, 3))
    );
    // Below the last line, or outside the area.
    assert_eq!(d.position_at(ScreenPoint { x: 4, y: 4 }), None);
    assert_eq!(d.position_at(ScreenPoint { x: 0, y: 1 }), None);
    assert_eq!(d.position_at(ScreenPoint { x: 4, y: 9 }), None);
}
