//! The session state bridging open documents, the zoom controller and terminal input.
//!
//! Every cursor move and edit goes through the controller so zoom containment holds no matter
//! where the input came from: proposed selections are clamped to the visible window, edits into
//! hidden lines are refused, and reloading a file from disk is a full-document replacement that
//! the controller reconciles with the active zoom.

use crate::document::TextDocument;
use crate::input;
use crate::surface::{Change, Position, ScreenPoint, Selection, Surface};
use crate::zoom::{ZoomCommand, ZoomController};
use log::warn;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::{fs, io};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Determines which UI mode is active and how keys are interpreted.
pub enum View {
    /// Keys edit the document and move the cursor.
    Edit,
    /// Captures vim-style command input after `Esc`.
    Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether a key was consumed or should fall through to default handling.
pub enum KeyOutcome {
    /// The key did something.
    Handled,
    /// Nothing handled the key.
    PassThrough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Cursor motions available from the keyboard.
pub enum Motion {
    /// One line up.
    Up,
    /// One line down.
    Down,
    /// One character left, wrapping to the previous line.
    Left,
    /// One character right, wrapping to the next line.
    Right,
    /// Start of the line.
    LineStart,
    /// End of the line.
    LineEnd,
}

/// Session state for the terminal editor.
pub struct AppState {
    /// Open documents.
    pub documents: Vec<TextDocument>,
    /// Index of the focused document.
    pub current: usize,
    /// Zoom state of every open document.
    pub zoom: ZoomController,
    /// Active UI mode.
    pub current_view: View,
    /// Accumulates command input in command mode.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Top-left cell of the breadcrumb text as last drawn.
    pub breadcrumb_origin: Option<ScreenPoint>,
    /// Set once the user asked to leave.
    pub should_quit: bool,
}

impl AppState {
    #[must_use]
    /// Initialises the session with `documents`, focusing the first one.
    pub fn new(documents: Vec<TextDocument>, zoom: ZoomController) -> Self {
        Self {
            documents,
            current: 0,
            zoom,
            current_view: View::Edit,
            command_buffer: String::new(),
            message: None,
            breadcrumb_origin: None,
            should_quit: false,
        }
    }

    #[must_use]
    /// The focused document.
    pub fn document(&self) -> &TextDocument {
        &self.documents[self.current]
    }

    /// The focused document, mutably.
    pub fn document_mut(&mut self) -> &mut TextDocument {
        &mut self.documents[self.current]
    }

    #[must_use]
    /// Whether the focused document is zoomed.
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed(self.document().id())
    }

    /// Runs a zoom command on the focused document.
    pub fn run_command(&mut self, command: ZoomCommand) -> bool {
        let doc = &mut self.documents[self.current];
        self.zoom.run(command, doc)
    }

    /// Dispatches a key press according to the active view.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match self.current_view {
            View::Edit => self.handle_edit_key(key),
            View::Command => {
                self.handle_command_key(key);
                KeyOutcome::Handled
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let extend = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char('r') if ctrl => self.reload(),
            KeyCode::Char('n') if ctrl => self.switch_document(true),
            KeyCode::Char('p') if ctrl => self.switch_document(false),
            // Zoom keys fall back to plain cursor motion when the command does nothing.
            KeyCode::Right if alt => {
                if !self.run_command(ZoomCommand::ZoomIn) {
                    self.move_cursor(Motion::Right, false);
                }
            }
            KeyCode::Left if alt => {
                if !self.run_command(ZoomCommand::ZoomOut) {
                    self.move_cursor(Motion::Left, false);
                }
            }
            KeyCode::Esc => {
                self.current_view = View::Command;
                self.command_buffer.clear();
                self.message = None;
            }
            KeyCode::Up => self.move_cursor(Motion::Up, extend),
            KeyCode::Down => self.move_cursor(Motion::Down, extend),
            KeyCode::Left => self.move_cursor(Motion::Left, extend),
            KeyCode::Right => self.move_cursor(Motion::Right, extend),
            KeyCode::Home => self.move_cursor(Motion::LineStart, extend),
            KeyCode::End => self.move_cursor(Motion::LineEnd, extend),
            KeyCode::Enter => self.insert_text("\n"),
            KeyCode::Tab => self.insert_text("\t"),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Char(c) if !ctrl && !alt => self.insert_text(&c.to_string()),
            _ => return KeyOutcome::PassThrough,
        }
        KeyOutcome::Handled
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.command_buffer.push(c),
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Esc => {
                self.current_view = View::Edit;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = std::mem::take(&mut self.command_buffer);
                self.current_view = View::Edit;
                self.execute(cmd.trim());
            }
            _ => {}
        }
    }

    /// Executes a command-mode command.
    pub fn execute(&mut self, cmd: &str) {
        if let Some(command) = ZoomCommand::ALL.into_iter().find(|c| c.id() == cmd) {
            if !self.run_command(command) {
                self.message = Some(format!("{}: nothing to do", command.name()));
            }
            return;
        }

        match cmd {
            "w" => self.save(),
            "wq" | "x" => {
                self.save();
                if self.document().is_modified() {
                    return;
                }
                if self.documents.iter().any(TextDocument::is_modified) {
                    self.message =
                        Some("Other documents have unsaved changes (:q! to discard)".to_string());
                } else {
                    self.should_quit = true;
                }
            }
            "q" => {
                if self.documents.iter().any(TextDocument::is_modified) {
                    self.message = Some("Unsaved changes (:q! to discard)".to_string());
                } else {
                    self.should_quit = true;
                }
            }
            "q!" => self.should_quit = true,
            "e" | "reload" => self.reload(),
            "n" => self.switch_document(true),
            "p" => self.switch_document(false),
            _ => self.message = Some(format!("Unknown command: {cmd}")),
        }
    }

    /// Moves the primary cursor, clamped to the zoomed window.
    ///
    /// With `extend` the selection anchor stays put and only the head moves.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) {
        let doc = &mut self.documents[self.current];
        let selection = doc.selections().first().copied().unwrap_or_default();
        let Position { line, ch } = selection.head;

        let head = match motion {
            Motion::Up if line > 0 => Position::new(line - 1, ch.min(doc.line_len(line - 1))),
            Motion::Up => Position::new(0, 0),
            Motion::Down if line < doc.last_line() => {
                Position::new(line + 1, ch.min(doc.line_len(line + 1)))
            }
            Motion::Down => Position::new(line, doc.line_len(line)),
            Motion::Left if ch > 0 => Position::new(line, ch - 1),
            Motion::Left if line > 0 => Position::new(line - 1, doc.line_len(line - 1)),
            Motion::Left => selection.head,
            Motion::Right if ch < doc.line_len(line) => Position::new(line, ch + 1),
            Motion::Right if line < doc.last_line() => Position::new(line + 1, 0),
            Motion::Right => selection.head,
            Motion::LineStart => Position::new(line, 0),
            Motion::LineEnd => Position::new(line, doc.line_len(line)),
        };

        let proposed = if extend {
            Selection {
                anchor: selection.anchor,
                head,
            }
        } else {
            Selection::cursor(head)
        };
        self.zoom.select(doc, vec![proposed]);
    }

    /// Replaces the primary selection with `text` and moves the cursor after it.
    pub fn insert_text(&mut self, text: &str) {
        let selection = self.document().selections().first().copied().unwrap_or_default();
        let mut change = Change::insert(selection.start(), text);
        change.to = selection.end();
        self.apply_edit(&change);
    }

    /// Deletes the selection, or the character before the cursor.
    pub fn delete_backward(&mut self) {
        let doc = self.document();
        let selection = doc.selections().first().copied().unwrap_or_default();
        let change = if !selection.is_empty() {
            Change::delete(selection.start(), selection.end())
        } else {
            let Position { line, ch } = selection.head;
            if ch > 0 {
                Change::delete(Position::new(line, ch - 1), selection.head)
            } else if line > 0 {
                Change::delete(Position::new(line - 1, doc.line_len(line - 1)), selection.head)
            } else {
                return;
            }
        };
        self.apply_edit(&change);
    }

    /// Deletes the selection, or the character after the cursor.
    pub fn delete_forward(&mut self) {
        let doc = self.document();
        let selection = doc.selections().first().copied().unwrap_or_default();
        let change = if !selection.is_empty() {
            Change::delete(selection.start(), selection.end())
        } else {
            let Position { line, ch } = selection.head;
            if ch < doc.line_len(line) {
                Change::delete(selection.head, Position::new(line, ch + 1))
            } else if line < doc.last_line() {
                Change::delete(selection.head, Position::new(line + 1, 0))
            } else {
                return;
            }
        };
        self.apply_edit(&change);
    }

    fn apply_edit(&mut self, change: &Change) {
        let doc = &mut self.documents[self.current];
        match self.zoom.edit(doc, change) {
            Some(end) => self.zoom.select(doc, vec![Selection::cursor(end)]),
            None => self.message = Some("Edit would reach outside the zoomed section".to_string()),
        }
    }

    /// Replaces the focused document with its file content, keeping zoom where possible.
    pub fn reload(&mut self) {
        let Some(path) = self.document().path().map(std::path::Path::to_path_buf) else {
            self.message = Some("Document has no file".to_string());
            return;
        };
        match input::read_text(&path) {
            Ok(text) => {
                let doc = &mut self.documents[self.current];
                let change = Change::set_value(&*doc, text);
                self.zoom.edit(doc, &change);
                self.zoom
                    .select(doc, vec![Selection::cursor(Position::new(0, 0))]);
                doc.mark_saved();
                self.message = Some(format!("Reloaded {}", path.display()));
            }
            Err(e) => {
                warn!("reloading {} failed: {e}", path.display());
                self.message = Some(format!("Error reloading: {e}"));
            }
        }
    }

    /// Writes the focused document back to its file.
    pub fn save(&mut self) {
        match self.save_current() {
            Ok(()) => self.message = Some("Saved".to_string()),
            Err(e) => {
                warn!("saving failed: {e}");
                self.message = Some(format!("Error saving: {e}"));
            }
        }
    }

    /// Save the focused document's content to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no file or writing fails.
    pub fn save_current(&mut self) -> io::Result<()> {
        let doc = self.document_mut();
        let path = doc
            .path()
            .map(std::path::Path::to_path_buf)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "document has no file"))?;
        fs::write(&path, doc.text())?;
        doc.mark_saved();
        Ok(())
    }

    /// Focuses the next (or previous) document, wrapping around.
    pub fn switch_document(&mut self, forward: bool) {
        let count = self.documents.len();
        if count < 2 {
            self.message = Some("No other documents".to_string());
            return;
        }
        self.current = if forward {
            (self.current + 1) % count
        } else {
            (self.current + count - 1) % count
        };
        self.breadcrumb_origin = None;
    }

    /// Handles a mouse event: clicks on the breadcrumb navigate, clicks in the text zoom in.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let point = ScreenPoint {
            x: event.column,
            y: event.row,
        };

        let doc = &mut self.documents[self.current];
        if let Some(origin) = self.breadcrumb_origin {
            if self.zoom.is_zoomed(doc.id()) && point.y == origin.y && point.x >= origin.x {
                let column = usize::from(point.x - origin.x);
                return self.zoom.click_breadcrumb(doc, column);
            }
        }
        self.zoom.click(doc, point)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
