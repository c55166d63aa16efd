//! The UI renders the application state into something visible and clickable.
//!
//! While zoomed, a breadcrumb bar sits above the editor pane. The editor pane only draws lines
//! that are not hidden, and records where it drew them so mouse clicks can be resolved back to
//! document positions.

use crate::app_state::{AppState, View};
use crate::breadcrumb::{Breadcrumb, CrumbTarget};
use crate::document::{TextDocument, Viewport};
use crate::formats::Format;
use crate::surface::{ScreenPoint, Surface};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HELP: &str =
    "Alt+→ Zoom in | Alt+← Zoom out | Click: zoom to section | ^R Reload | ^S Save | Esc: Command | ^Q Quit";

/// Renders the focused document, its breadcrumb when zoomed, and the status bar.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let zoomed = app.is_zoomed();
    let constraints = if zoomed {
        vec![
            Constraint::Length(3), // Breadcrumb
            Constraint::Min(0),    // Editor
            Constraint::Length(3), // Help
        ]
    } else {
        vec![Constraint::Min(0), Constraint::Length(3)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let (editor_area, help_area) = if zoomed {
        let id = app.document().id();
        if let Some(state) = app.zoom.state(id) {
            app.breadcrumb_origin = Some(draw_breadcrumb(f, state.breadcrumb(), chunks[0]));
        }
        (chunks[1], chunks[2])
    } else {
        app.breadcrumb_origin = None;
        (chunks[0], chunks[1])
    };

    draw_editor(f, app, editor_area);
    draw_help(f, app, help_area);
}

/// Draws the breadcrumb and returns where its text starts.
fn draw_breadcrumb(f: &mut Frame, breadcrumb: &Breadcrumb, area: Rect) -> ScreenPoint {
    let mut spans = Vec::new();
    for (i, crumb) in breadcrumb.crumbs().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(breadcrumb.separator().to_string()));
        }
        let color = match crumb.target {
            CrumbTarget::Root => Color::Cyan,
            CrumbTarget::Heading(_) => Color::Blue,
        };
        spans.push(Span::styled(
            crumb.label.clone(),
            Style::default()
                .fg(color)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    let block = Block::default().borders(Borders::ALL).title("Zoom");
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    ScreenPoint {
        x: inner.x,
        y: inner.y,
    }
}

fn heading_style(level: usize) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Blue,
        3 => Color::Cyan,
        4 => Color::Green,
        _ => Color::Yellow,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Scroll offset that keeps `row` inside a window of `height` rows.
fn follow_cursor(scroll: usize, row: usize, height: usize) -> usize {
    if height == 0 || row < scroll {
        row
    } else if row >= scroll + height {
        row + 1 - height
    } else {
        scroll
    }
}

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn draw_editor(f: &mut Frame, app: &mut AppState, area: Rect) {
    let doc = &app.documents[app.current];
    let modified = if doc.is_modified() { " [+]" } else { "" };
    let title = if app.documents.len() > 1 {
        format!(
            "{}{modified} ({}/{})",
            doc.title(),
            app.current + 1,
            app.documents.len()
        )
    } else {
        format!("{}{modified}", doc.title())
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    let height = usize::from(inner.height);

    let cursor = doc.cursor();
    let cursor_row = doc.visible_row(cursor.line).unwrap_or(0);
    let scroll = follow_cursor(doc.viewport().scroll, cursor_row, height);

    let lines = visible_text(doc, app.zoom.format(), scroll, height);
    f.render_widget(Paragraph::new(lines).block(block), area);

    if app.current_view == View::Edit {
        let x = inner.x.saturating_add(to_cell(cursor.ch));
        let y = inner.y.saturating_add(to_cell(cursor_row - scroll));
        if x < inner.right() && y < inner.bottom() {
            f.set_cursor_position((x, y));
        }
    }

    app.document_mut().set_viewport(Viewport {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: inner.height,
        scroll,
    });
}

fn visible_text<'a>(
    doc: &'a TextDocument,
    format: &dyn Format,
    scroll: usize,
    height: usize,
) -> Vec<Line<'a>> {
    doc.visible_lines()
        .skip(scroll)
        .take(height)
        .map(|(_, text)| match format.heading_level(text) {
            Some(level) => Line::styled(text, heading_style(level)),
            None => Line::raw(text),
        })
        .collect()
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help_text = if app.current_view == View::Command {
        format!(":{}", app.command_buffer)
    } else if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        HELP.to_string()
    };

    let title = if app.current_view == View::Command {
        "Command"
    } else {
        ""
    };
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(help, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
