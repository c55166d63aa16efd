//! In-memory document surface backing the terminal editor.
//!
//! Lines are stored as owned strings next to a parallel vector of hidden marks. Line anchors are
//! remapped on every committed change so they keep pointing at the same logical line, and the
//! viewport recorded at draw time lets screen clicks be resolved back to document positions.

use crate::surface::{Change, LineAnchor, Position, ScreenPoint, Selection, Surface, SurfaceId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Screen area the document was last drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge column.
    pub x: u16,
    /// Top edge row.
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
    /// Number of visible lines scrolled past the top edge.
    pub scroll: usize,
}

impl Viewport {
    #[must_use]
    /// Whether `point` falls inside the drawn area.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x - self.x < self.width
            && point.y - self.y < self.height
    }
}

/// A text document that can be zoomed and edited.
#[derive(Debug)]
pub struct TextDocument {
    id: SurfaceId,
    title: String,
    path: Option<PathBuf>,
    lines: Vec<String>,
    hidden: Vec<bool>,
    selections: Vec<Selection>,
    anchors: HashMap<LineAnchor, Option<usize>>,
    next_anchor: u64,
    viewport: Viewport,
    modified: bool,
}

impl TextDocument {
    #[must_use]
    /// Creates a document titled `title` holding `text`.
    pub fn new(title: impl Into<String>, text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let hidden = vec![false; lines.len()];
        Self {
            id: SurfaceId(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed)),
            title: title.into(),
            path: None,
            lines,
            hidden,
            selections: vec![Selection::default()],
            anchors: HashMap::new(),
            next_anchor: 0,
            viewport: Viewport::default(),
            modified: false,
        }
    }

    #[must_use]
    /// Attaches the file this document was read from.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    #[must_use]
    /// File backing this document, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    /// Whether the document changed since it was loaded or last saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Records that the content now matches the file on disk.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    #[must_use]
    /// Area the document was last drawn into.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Records where the document was drawn, for click resolution.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Unhidden lines with their indices, in document order.
    pub fn visible_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.hidden[*i])
            .map(|(i, l)| (i, l.as_str()))
    }

    #[must_use]
    /// Row of `line` among the visible lines, if it is visible.
    pub fn visible_row(&self, line: usize) -> Option<usize> {
        self.visible_lines().position(|(i, _)| i == line)
    }

    #[must_use]
    /// Number of live anchors.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        Position::new(line, pos.ch.min(self.line_len(line)))
    }

    fn byte_offset(&self, pos: Position) -> usize {
        let line = &self.lines[pos.line];
        line.char_indices().nth(pos.ch).map_or(line.len(), |(i, _)| i)
    }
}

impl Surface for TextDocument {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn set_line_hidden(&mut self, line: usize, hidden: bool) {
        if let Some(flag) = self.hidden.get_mut(line) {
            *flag = hidden;
        }
    }

    fn is_line_hidden(&self, line: usize) -> bool {
        self.hidden.get(line).copied().unwrap_or(false)
    }

    fn cursor(&self) -> Position {
        self.selections.first().map(|s| s.head).unwrap_or_default()
    }

    fn set_cursor(&mut self, pos: Position) {
        self.selections = vec![Selection::cursor(self.clamp_position(pos))];
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections
            .into_iter()
            .map(|s| Selection {
                anchor: self.clamp_position(s.anchor),
                head: self.clamp_position(s.head),
            })
            .collect();
        if self.selections.is_empty() {
            self.selections.push(Selection::default());
        }
    }

    fn position_at(&self, point: ScreenPoint) -> Option<Position> {
        if !self.viewport.contains(point) {
            return None;
        }
        let row = usize::from(point.y - self.viewport.y) + self.viewport.scroll;
        let (line, text) = self.visible_lines().nth(row)?;
        let ch = usize::from(point.x - self.viewport.x).min(text.chars().count());
        Some(Position::new(line, ch))
    }

    fn anchor_line(&mut self, line: usize) -> LineAnchor {
        let anchor = LineAnchor(self.next_anchor);
        self.next_anchor += 1;
        self.anchors.insert(anchor, Some(line.min(self.last_line())));
        anchor
    }

    fn anchor_position(&self, anchor: LineAnchor) -> Option<usize> {
        self.anchors.get(&anchor).copied().flatten()
    }

    fn release_anchor(&mut self, anchor: LineAnchor) {
        self.anchors.remove(&anchor);
    }

    fn apply_change(&mut self, change: &Change) -> Position {
        let from = self.clamp_position(change.from);
        let to = self.clamp_position(change.to).max(from);

        let head = &self.lines[from.line][..self.byte_offset(from)];
        let tail = &self.lines[to.line][self.byte_offset(to)..];
        let inserted: Vec<&str> = change.text.split('\n').collect();
        let count = inserted.len();

        let mut replacement: Vec<String> = inserted.iter().map(|s| (*s).to_string()).collect();
        replacement[0].insert_str(0, head);
        replacement[count - 1].push_str(tail);

        let end = if count == 1 {
            Position::new(from.line, from.ch + inserted[0].chars().count())
        } else {
            Position::new(from.line + count - 1, inserted[count - 1].chars().count())
        };

        let removed = to.line - from.line + 1;
        let flag = self.hidden[from.line];
        self.lines.splice(from.line..=to.line, replacement);
        self.hidden
            .splice(from.line..=to.line, std::iter::repeat_n(flag, count));

        for line in self.anchors.values_mut() {
            *line = line.and_then(|l| {
                if l < from.line {
                    Some(l)
                } else if l > to.line {
                    Some(l - removed + count)
                } else if l - from.line < count {
                    Some(l)
                } else {
                    None
                }
            });
        }

        let selections = std::mem::take(&mut self.selections);
        self.set_selections(selections);
        self.modified = true;
        end
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
