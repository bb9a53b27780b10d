use std::collections::BTreeSet;

pub(crate) const HEADER_HEIGHT: f32 = 48.0;
pub(crate) const ITEM_ROW_HEIGHT: f32 = 30.0;
pub(crate) const SECTION_ROW_HEIGHT: f32 = 28.0;
pub(crate) const CLUSTER_GRID_COLUMNS: usize = 5;
pub(crate) const EXPANDER_WIDTH: f32 = 14.0;

/// Read-only left sidebar data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftSidebarViewModel<'a> {
    pub(crate) collapsed_sections: &'a BTreeSet<String>,
    pub(crate) is_dragging: bool,
}

impl LeftSidebarViewModel<'_> {
    pub(crate) fn is_section_collapsed(&self, section_id: &str) -> bool {
        self.collapsed_sections.contains(section_id)
    }
}
