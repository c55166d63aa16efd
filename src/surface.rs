//! The host document surface the zoom controller drives.
//!
//! Line storage, rendering, the line-hiding primitive and cursor handling all belong to the
//! host. The controller only needs the narrow set of operations in [`Surface`], plus the value
//! types describing positions, selections and edits.

use std::cmp::Ordering;

/// Identity of a rendered document surface, used as the controller's registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Stable reference to a line that survives edits to other lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineAnchor(pub u64);

/// A line/column location in a document. Columns count characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character column.
    pub ch: usize,
}

impl Position {
    #[must_use]
    /// Creates a position.
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.line, self.ch).cmp(&(other.line, other.ch))
    }
}

/// A selection range. The head is where the cursor sits; anchor and head are equal for a
/// bare cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Fixed end of the selection.
    pub anchor: Position,
    /// Moving end of the selection.
    pub head: Position,
}

impl Selection {
    #[must_use]
    /// An empty selection (plain cursor) at `pos`.
    pub const fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    #[must_use]
    /// Whether anchor and head coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    #[must_use]
    /// The earlier of anchor and head.
    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    #[must_use]
    /// The later of anchor and head.
    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }
}

/// Where an edit came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Typed text.
    Input,
    /// Deletion by the user.
    Delete,
    /// Programmatic replacement of the document value.
    SetValue,
    /// Anything else, tagged by the host.
    Other(String),
}

/// A proposed or committed edit: the text between `from` and `to` becomes `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Origin tag of the edit.
    pub origin: ChangeOrigin,
    /// Start of the replaced range.
    pub from: Position,
    /// End of the replaced range (exclusive column).
    pub to: Position,
    /// Replacement text, `\n` separating lines.
    pub text: String,
}

impl Change {
    #[must_use]
    /// Inserts `text` at `at`.
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            origin: ChangeOrigin::Input,
            from: at,
            to: at,
            text: text.into(),
        }
    }

    #[must_use]
    /// Deletes the range `from..to`.
    pub fn delete(from: Position, to: Position) -> Self {
        Self {
            origin: ChangeOrigin::Delete,
            from,
            to,
            text: String::new(),
        }
    }

    #[must_use]
    /// Replaces the whole content of `surface` with `text`.
    pub fn set_value<S: Surface + ?Sized>(surface: &S, text: impl Into<String>) -> Self {
        let last = surface.last_line();
        Self {
            origin: ChangeOrigin::SetValue,
            from: Position::new(0, 0),
            to: Position::new(last, surface.line_len(last)),
            text: text.into(),
        }
    }

    #[must_use]
    /// Whether this is a programmatic replacement spanning the whole of `surface`.
    pub fn is_full_replace<S: Surface + ?Sized>(&self, surface: &S) -> bool {
        let last = surface.last_line();
        self.origin == ChangeOrigin::SetValue
            && self.from == Position::new(0, 0)
            && self.to == Position::new(last, surface.line_len(last))
    }
}

/// A point on screen, in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenPoint {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

/// The contiguous window of unhidden lines, recomputed on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    /// Column 0 of the first visible line.
    pub first: Position,
    /// End of the last visible line.
    pub last: Position,
}

impl VisibleRange {
    #[must_use]
    /// Scans `surface` for the first unhidden line and extends while lines stay unhidden.
    pub fn scan<S: Surface + ?Sized>(surface: &S) -> Option<Self> {
        let count = surface.line_count();
        let first = (0..count).find(|&i| !surface.is_line_hidden(i))?;
        let last = (first..count)
            .take_while(|&i| !surface.is_line_hidden(i))
            .last()
            .unwrap_or(first);

        Some(Self {
            first: Position::new(first, 0),
            last: Position::new(last, surface.line_len(last)),
        })
    }

    /// Moves `pos` onto the nearest boundary if it lies outside the window.
    ///
    /// Returns whether `pos` was changed.
    pub fn clamp(&self, pos: &mut Position) -> bool {
        if pos.line < self.first.line {
            *pos = self.first;
            true
        } else if pos.line > self.last.line {
            *pos = self.last;
            true
        } else {
            false
        }
    }
}

/// Operations the zoom controller consumes from the host document surface.
pub trait Surface {
    /// Identity of this surface.
    fn id(&self) -> SurfaceId;

    /// Display title, used as the root breadcrumb label.
    fn title(&self) -> String;

    /// Full document text, lines joined by `\n`.
    fn text(&self) -> String;

    /// Content of line `line`.
    fn line(&self, line: usize) -> Option<&str>;

    /// Number of lines. A document always has at least one line.
    fn line_count(&self) -> usize;

    /// Index of the last line.
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// Length of `line` in characters, 0 when out of range.
    fn line_len(&self, line: usize) -> usize {
        self.line(line).map_or(0, |l| l.chars().count())
    }

    /// Sets or clears the hidden mark on `line`. Idempotent.
    fn set_line_hidden(&mut self, line: usize, hidden: bool);

    /// Whether `line` carries the hidden mark.
    fn is_line_hidden(&self, line: usize) -> bool;

    /// Primary cursor position.
    fn cursor(&self) -> Position;

    /// Collapses the selection to a cursor at `pos`.
    fn set_cursor(&mut self, pos: Position);

    /// Current selections, primary first.
    fn selections(&self) -> Vec<Selection>;

    /// Replaces all selections.
    fn set_selections(&mut self, selections: Vec<Selection>);

    /// Maps a screen point to a document position, if it hits rendered text.
    fn position_at(&self, point: ScreenPoint) -> Option<Position>;

    /// Creates an anchor tracking `line`.
    fn anchor_line(&mut self, line: usize) -> LineAnchor;

    /// Current line of `anchor`, or `None` if its line no longer exists.
    fn anchor_position(&self, anchor: LineAnchor) -> Option<usize>;

    /// Stops tracking `anchor`.
    fn release_anchor(&mut self, anchor: LineAnchor);

    /// Commits `change` and returns the position just after the inserted text.
    fn apply_change(&mut self, change: &Change) -> Position;
}

#[cfg(test)]
#[path = "tests/surface.rs"]
mod tests;
