use std::collections::BTreeSet;

use crate::components::primitive::resize_handle::DragGesture;

/// Section fold flags and the in-flight resize drag.
#[derive(Debug, Default)]
pub(super) struct LeftSidebarState {
    collapsed_sections: BTreeSet<String>,
    drag: Option<DragGesture>,
}

impl LeftSidebarState {
    pub(super) fn collapsed_sections(&self) -> &BTreeSet<String> {
        &self.collapsed_sections
    }

    pub(super) fn toggle_section(&mut self, section_id: String) {
        if !self.collapsed_sections.remove(&section_id) {
            self.collapsed_sections.insert(section_id);
        }
    }

    pub(super) fn expand_section(&mut self, section_id: &str) {
        self.collapsed_sections.remove(section_id);
    }

    pub(super) fn drag(&self) -> Option<DragGesture> {
        self.drag
    }

    pub(super) fn drag_mut(&mut self) -> Option<&mut DragGesture> {
        self.drag.as_mut()
    }

    pub(super) fn begin_drag(&mut self, gesture: DragGesture) {
        self.drag = Some(gesture);
    }

    pub(super) fn end_drag(&mut self) {
        self.drag = None;
    }
}
