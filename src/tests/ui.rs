use super::{draw, follow_cursor};
use crate::app_state::AppState;
use crate::document::TextDocument;
use crate::surface::{Position, Surface};
use crate::zoom::ZoomController;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;

fn render(app: &mut AppState) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..12u16)
        .map(|y| (0..60u16).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn app() -> AppState {
    let doc = TextDocument::new("notes", "# A\nx\n## B\ny\n## C\nz");
    AppState::new(vec![doc], ZoomController::default())
}

#[test]
fn test_unzoomed_shows_every_line() {
    let mut app = app();
    let rows = render(&mut app);
    assert!(rows[0].contains("notes"));
    assert!(rows[1].contains("# A"));
    assert!(rows[6].contains('z'));
    assert!(rows[10].contains("Zoom in"));
    assert!(app.breadcrumb_origin.is_none());
}

#[test]
fn test_zoomed_shows_breadcrumb_and_section() {
    let mut app = app();
    app.zoom.zoom_in(&mut app.documents[0], Position::new(3, 0));
    let rows = render(&mut app);

    assert!(rows[0].contains("Zoom"));
    assert!(rows[1].contains("notes > A"));
    assert!(rows[4].contains("## B"));
    assert!(rows[5].contains('y'));
    assert!(!rows.iter().any(|r| r.contains("## C")));
    assert!(!rows[6].contains('x'));
}

#[test]
fn test_clicks_resolve_against_drawn_layout() {
    let mut app = app();
    render(&mut app);

    // Row 3 holds "## B" inside the editor border.
    assert!(app.handle_mouse(click(2, 3)));
    assert!(app.is_zoomed());
    assert_eq!(app.document().cursor(), Position::new(2, 4));

    render(&mut app);
    // The root crumb leaves zoom.
    assert!(app.handle_mouse(click(1, 1)));
    assert!(!app.is_zoomed());
    assert!((0..app.document().line_count()).all(|i| !app.document().is_line_hidden(i)));
}

#[test]
fn test_follow_cursor() {
    assert_eq!(follow_cursor(0, 3, 10), 0);
    assert_eq!(follow_cursor(0, 12, 10), 3);
    assert_eq!(follow_cursor(5, 2, 10), 2);
    assert_eq!(follow_cursor(4, 0, 0), 0);
}
