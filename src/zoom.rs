//! The zoom controller hides everything outside one heading's section.
//!
//! Each document surface is either unzoomed or zoomed with exactly one [`ZoomState`]. The
//! controller is the only owner of those states: zooming into a new heading tears the old state
//! down before building a fresh one, and hidden-line marks on the surface are the single source
//! of truth for what is visible.
//!
//! ```text
//! Unzoomed --zoom_in--> Zoomed(state)
//!    ^                    |  |
//!    |                    |  +--zoom_in--> Zoomed(new state)
//!    +-----zoom_out-------+
//! ```
//!
//! Hosts route edits through [`ZoomController::before_change`] / [`ZoomController::after_change`]
//! and proposed selections through [`ZoomController::before_selection_change`], or use the
//! bundled [`ZoomController::edit`] and [`ZoomController::select`].

use crate::breadcrumb::{Breadcrumb, CrumbTarget};
use crate::config::Config;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::marker::MarkerFormat;
use crate::formats::Format;
use crate::outline::Outline;
use crate::surface::{
    Change, ChangeOrigin, LineAnchor, Position, ScreenPoint, Selection, Surface, SurfaceId,
    VisibleRange,
};
use log::{debug, info};
use std::collections::HashMap;

/// Live zoom of one surface.
#[derive(Debug)]
pub struct ZoomState {
    anchor: LineAnchor,
    breadcrumb: Breadcrumb,
}

impl ZoomState {
    #[must_use]
    /// Anchor on the cursor line at zoom time.
    pub fn anchor(&self) -> LineAnchor {
        self.anchor
    }

    #[must_use]
    /// Navigation chain shown above the zoomed section.
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }
}

/// Named actions exposed to the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomCommand {
    /// Zoom into the section around the cursor.
    ZoomIn,
    /// Leave zoom.
    ZoomOut,
}

impl ZoomCommand {
    /// Every command, in registration order.
    pub const ALL: [Self; 2] = [Self::ZoomIn, Self::ZoomOut];

    #[must_use]
    /// Stable command id.
    pub fn id(self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
        }
    }

    #[must_use]
    /// Human-readable command name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ZoomIn => "Zoom in",
            Self::ZoomOut => "Zoom out",
        }
    }
}

/// Owns the zoom state of every surface it has been used with.
pub struct ZoomController {
    format: Box<dyn Format>,
    separator: String,
    untitled: String,
    states: HashMap<SurfaceId, ZoomState>,
    pending: HashMap<SurfaceId, LineAnchor>,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(Box::new(MarkdownFormat))
    }
}

impl ZoomController {
    #[must_use]
    /// Creates a controller recognising headings with `format`.
    pub fn new(format: Box<dyn Format>) -> Self {
        Self {
            format,
            separator: " > ".to_string(),
            untitled: "\u{a0}".repeat(5),
            states: HashMap::new(),
            pending: HashMap::new(),
        }
    }

    #[must_use]
    /// Creates a controller using the configured marker and breadcrumb labels.
    pub fn from_config(cfg: &Config) -> Self {
        let format: Box<dyn Format> = match MarkerFormat::from_marker(&cfg.heading_marker) {
            Some(f) if f.marker() != '#' => Box::new(f),
            _ => Box::new(MarkdownFormat),
        };
        Self {
            separator: cfg.breadcrumb_separator.clone(),
            untitled: cfg.untitled_label.clone(),
            ..Self::new(format)
        }
    }

    #[must_use]
    /// Heading syntax in use.
    pub fn format(&self) -> &dyn Format {
        self.format.as_ref()
    }

    #[must_use]
    /// Zoom state of `id`, if zoomed.
    pub fn state(&self, id: SurfaceId) -> Option<&ZoomState> {
        self.states.get(&id)
    }

    #[must_use]
    /// Whether `id` is currently zoomed.
    pub fn is_zoomed(&self, id: SurfaceId) -> bool {
        self.states.contains_key(&id)
    }

    #[must_use]
    /// Re-parses the outline of `surface`.
    pub fn outline<S: Surface + ?Sized>(&self, surface: &S) -> Outline {
        Outline::parse(&surface.text(), self.format.as_ref())
    }

    /// Zooms into the section enclosing `cursor`.
    ///
    /// Walks upward from the cursor line to the nearest heading; fails (returning `false`) when
    /// none exists. Any existing zoom on the surface is torn down first.
    pub fn zoom_in<S: Surface + ?Sized>(&mut self, surface: &mut S, cursor: Position) -> bool {
        self.zoom_in_at(surface, cursor).is_some()
    }

    /// Zooms in and returns the start line of the zoomed heading.
    fn zoom_in_at<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        cursor: Position,
    ) -> Option<usize> {
        let line = cursor.line.min(surface.last_line());
        let outline = self.outline(&*surface);
        let Some(node) = outline.enclosing_heading(line) else {
            debug!("no heading encloses line {line}, not zooming");
            return None;
        };

        self.zoom_out(surface);

        for i in 0..surface.line_count() {
            if !node.contains(i) {
                surface.set_line_hidden(i, true);
            }
        }

        let path = outline.path_by_header(node);
        let breadcrumb = Breadcrumb::build(
            &surface.title(),
            &path,
            self.format.as_ref(),
            &self.separator,
            &self.untitled,
        );
        let anchor = surface.anchor_line(line);

        debug!(
            "zoomed {:?} into lines {}..={} ({} ancestors)",
            surface.id(),
            node.start_line,
            node.end_line,
            path.len()
        );
        self.states
            .insert(surface.id(), ZoomState { anchor, breadcrumb });
        Some(node.start_line)
    }

    /// Leaves zoom, unhiding every line. Returns `false` if the surface was not zoomed.
    pub fn zoom_out<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        match self.teardown(surface) {
            Some(state) => {
                surface.release_anchor(state.anchor);
                true
            }
            None => false,
        }
    }

    /// Removes the state and hidden marks, handing the anchor back to the caller.
    fn teardown<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<ZoomState> {
        let state = self.states.remove(&surface.id())?;
        for i in 0..surface.line_count() {
            surface.set_line_hidden(i, false);
        }
        debug!("zoomed out of {:?}", surface.id());
        Some(state)
    }

    /// Runs a named command against the surface's current cursor.
    pub fn run<S: Surface + ?Sized>(&mut self, command: ZoomCommand, surface: &mut S) -> bool {
        match command {
            ZoomCommand::ZoomIn => {
                let cursor = surface.cursor();
                self.zoom_in(surface, cursor)
            }
            ZoomCommand::ZoomOut => self.zoom_out(surface),
        }
    }

    /// Zooms into the section under a click and parks the cursor at the end of its heading.
    pub fn click<S: Surface + ?Sized>(&mut self, surface: &mut S, point: ScreenPoint) -> bool {
        let Some(pos) = surface.position_at(point) else {
            return false;
        };
        let Some(heading) = self.zoom_in_at(surface, pos) else {
            return false;
        };
        let end = surface.line_len(heading);
        surface.set_cursor(Position::new(heading, end));
        true
    }

    /// Performs the action of a breadcrumb label.
    pub fn activate_crumb<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        target: CrumbTarget,
    ) -> bool {
        match target {
            CrumbTarget::Root => self.zoom_out(surface),
            CrumbTarget::Heading(line) => self.zoom_in(surface, Position::new(line, 0)),
        }
    }

    /// Activates the breadcrumb label drawn at `column`, if any.
    pub fn click_breadcrumb<S: Surface + ?Sized>(&mut self, surface: &mut S, column: usize) -> bool {
        let target = self
            .states
            .get(&surface.id())
            .and_then(|s| s.breadcrumb.hit_test(column))
            .map(|c| c.target);
        target.is_some_and(|t| self.activate_crumb(surface, t))
    }

    /// Pre-edit hook: a full-document replacement while zoomed drops the zoom ahead of time and
    /// remembers the anchor so [`ZoomController::after_change`] can restore it.
    pub fn before_change<S: Surface + ?Sized>(&mut self, surface: &mut S, change: &Change) {
        if !self.is_zoomed(surface.id()) || !change.is_full_replace(&*surface) {
            return;
        }
        if let Some(state) = self.teardown(surface) {
            info!("full replace on {:?}, suspending zoom", surface.id());
            if let Some(old) = self.pending.insert(surface.id(), state.anchor) {
                surface.release_anchor(old);
            }
        }
    }

    /// Post-edit hook: after a full replacement, zooms back in at the line now under the anchor.
    ///
    /// If the anchor's line no longer exists the surface stays unzoomed.
    pub fn after_change<S: Surface + ?Sized>(&mut self, surface: &mut S, change: &Change) {
        if change.origin != ChangeOrigin::SetValue {
            return;
        }
        let Some(anchor) = self.pending.remove(&surface.id()) else {
            return;
        };
        let line = surface.anchor_position(anchor);
        surface.release_anchor(anchor);
        match line {
            Some(line) => {
                let rezoomed = self.zoom_in(surface, Position::new(line, 0));
                info!("restored zoom on {:?} at line {line}: {rezoomed}", surface.id());
            }
            None => info!("anchor of {:?} gone after replace, staying unzoomed", surface.id()),
        }
    }

    #[must_use]
    /// Pre-selection hook: clamps endpoints that fall outside the visible window.
    ///
    /// Returns `None` when the proposal may pass through unchanged.
    pub fn before_selection_change<S: Surface + ?Sized>(
        &self,
        surface: &S,
        proposed: &[Selection],
    ) -> Option<Vec<Selection>> {
        if !self.is_zoomed(surface.id()) {
            return None;
        }
        let range = VisibleRange::scan(surface)?;

        let mut changed = false;
        let clamped: Vec<Selection> = proposed
            .iter()
            .map(|sel| {
                let mut sel = *sel;
                changed |= range.clamp(&mut sel.anchor);
                changed |= range.clamp(&mut sel.head);
                sel
            })
            .collect();

        changed.then_some(clamped)
    }

    /// Commits `proposed` selections after passing them through the clamp.
    pub fn select<S: Surface + ?Sized>(&self, surface: &mut S, proposed: Vec<Selection>) {
        let selections = self
            .before_selection_change(&*surface, &proposed)
            .unwrap_or(proposed);
        surface.set_selections(selections);
    }

    /// Applies `change` with both edit hooks around it.
    ///
    /// While zoomed, edits other than a full replacement that start or end on a hidden line are
    /// refused and `None` is returned.
    pub fn edit<S: Surface + ?Sized>(&mut self, surface: &mut S, change: &Change) -> Option<Position> {
        if self.is_zoomed(surface.id())
            && !change.is_full_replace(&*surface)
            && (surface.is_line_hidden(change.from.line) || surface.is_line_hidden(change.to.line))
        {
            debug!("refusing edit into hidden lines of {:?}", surface.id());
            return None;
        }
        self.before_change(surface, change);
        let end = surface.apply_change(change);
        self.after_change(surface, change);
        Some(end)
    }

    /// Drops every trace of `surface`, e.g. when its document closes.
    pub fn forget<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.zoom_out(surface);
        if let Some(anchor) = self.pending.remove(&surface.id()) {
            surface.release_anchor(anchor);
        }
    }
}

#[cfg(test)]
#[path = "tests/zoom.rs"]
mod tests;
