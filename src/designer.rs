//! Designer state: the active tool and the current selection.
//!
//! This is the single source of truth for "what is selected" and "what tool
//! is active" during one editing session. It is constructed fresh per
//! session, passed by reference to whoever needs it, and discarded on
//! navigation; nothing here is ever persisted.
//!
//! Invariants:
//! - switching tools always empties the selection, so a stale selection can
//!   never act under a new tool's semantics;
//! - the selection kind and the id list never disagree: the kind is `None`
//!   exactly when the id list is empty.

#[cfg(test)]
#[path = "designer_test.rs"]
mod designer_test;

use crate::map::EntityId;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Draw a new section rectangle.
    DrawZone,
}

/// What kind of objects the current selection holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionKind {
    /// Nothing selected.
    #[default]
    None,
    /// Only sections.
    Section,
    /// Only seats.
    Seat,
    /// Both sections and seats.
    Mixed,
}

/// Tool and selection state for one editing session.
#[derive(Debug, Clone, Default)]
pub struct DesignerState {
    tool: Tool,
    selected_ids: Vec<EntityId>,
    kind: SelectionKind,
}

impl DesignerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn selection_kind(&self) -> SelectionKind {
        self.kind
    }

    /// Currently selected object ids (empty iff the kind is `None`).
    #[must_use]
    pub fn selected_ids(&self) -> &[EntityId] {
        &self.selected_ids
    }

    /// Activate a tool. Always clears the selection, even when the tool is
    /// unchanged.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.clear_selection();
    }

    /// Replace the selection wholesale. Does not change the tool.
    ///
    /// An empty id list (or an explicit `SelectionKind::None`) normalizes
    /// the stored state to no selection.
    pub fn set_selected_objects(&mut self, ids: Vec<EntityId>, kind: SelectionKind) {
        if ids.is_empty() || kind == SelectionKind::None {
            self.clear_selection();
        } else {
            self.selected_ids = ids;
            self.kind = kind;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
        self.kind = SelectionKind::None;
    }
}
