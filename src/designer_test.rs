use super::*;

fn ids(n: usize) -> Vec<EntityId> {
    (0..n).map(|_| EntityId::pending()).collect()
}

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_variants_distinct() {
    assert_ne!(Tool::Select, Tool::DrawZone);
}

// =============================================================
// SelectionKind
// =============================================================

#[test]
fn selection_kind_default_is_none() {
    assert_eq!(SelectionKind::default(), SelectionKind::None);
}

// =============================================================
// DesignerState: defaults
// =============================================================

#[test]
fn new_state_has_select_tool_and_no_selection() {
    let state = DesignerState::new();
    assert_eq!(state.tool(), Tool::Select);
    assert_eq!(state.selection_kind(), SelectionKind::None);
    assert!(state.selected_ids().is_empty());
}

// =============================================================
// set_tool
// =============================================================

#[test]
fn set_tool_changes_tool() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::DrawZone);
    assert_eq!(state.tool(), Tool::DrawZone);
}

#[test]
fn set_tool_clears_section_selection() {
    let mut state = DesignerState::new();
    state.set_selected_objects(ids(2), SelectionKind::Section);
    state.set_tool(Tool::DrawZone);
    assert_eq!(state.selection_kind(), SelectionKind::None);
    assert!(state.selected_ids().is_empty());
}

#[test]
fn set_tool_clears_seat_selection() {
    let mut state = DesignerState::new();
    state.set_selected_objects(ids(3), SelectionKind::Seat);
    state.set_tool(Tool::Select);
    assert_eq!(state.selection_kind(), SelectionKind::None);
}

#[test]
fn set_tool_clears_mixed_selection() {
    let mut state = DesignerState::new();
    state.set_selected_objects(ids(4), SelectionKind::Mixed);
    state.set_tool(Tool::DrawZone);
    assert!(state.selected_ids().is_empty());
}

#[test]
fn set_tool_same_tool_still_clears_selection() {
    let mut state = DesignerState::new();
    state.set_selected_objects(ids(1), SelectionKind::Seat);
    state.set_tool(Tool::Select); // already the active tool
    assert_eq!(state.selection_kind(), SelectionKind::None);
    assert!(state.selected_ids().is_empty());
}

// =============================================================
// set_selected_objects
// =============================================================

#[test]
fn select_sections_stores_ids_and_kind() {
    let mut state = DesignerState::new();
    let selection = ids(2);
    state.set_selected_objects(selection.clone(), SelectionKind::Section);
    assert_eq!(state.selection_kind(), SelectionKind::Section);
    assert_eq!(state.selected_ids(), selection.as_slice());
}

#[test]
fn select_replaces_wholesale() {
    let mut state = DesignerState::new();
    state.set_selected_objects(ids(3), SelectionKind::Seat);
    let second = ids(1);
    state.set_selected_objects(second.clone(), SelectionKind::Section);
    assert_eq!(state.selected_ids(), second.as_slice());
    assert_eq!(state.selection_kind(), SelectionKind::Section);
}

#[test]
fn select_does_not_change_tool() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::DrawZone);
    state.set_selected_objects(ids(1), SelectionKind::Section);
    assert_eq!(state.tool(), Tool::DrawZone);
}

#[test]
fn empty_ids_normalize_kind_to_none() {
    let mut state = DesignerState::new();
    for kind in [SelectionKind::Section, SelectionKind::Seat, SelectionKind::Mixed] {
        state.set_selected_objects(ids(2), SelectionKind::Mixed);
        state.set_selected_objects(Vec::new(), kind);
        assert_eq!(state.selection_kind(), SelectionKind::None);
        assert!(state.selected_ids().is_empty());
    }
}

#[test]
fn kind_none_forces_ids_empty() {
    let mut state = DesignerState::new();
    state.set_selected_objects(ids(2), SelectionKind::None);
    assert_eq!(state.selection_kind(), SelectionKind::None);
    assert!(state.selected_ids().is_empty());
}

// =============================================================
// clear_selection
// =============================================================

#[test]
fn clear_selection_empties_state() {
    let mut state = DesignerState::new();
    state.set_selected_objects(ids(2), SelectionKind::Mixed);
    state.clear_selection();
    assert_eq!(state.selection_kind(), SelectionKind::None);
    assert!(state.selected_ids().is_empty());
}
