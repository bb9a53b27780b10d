use splus_nav::{Cluster, Section};

pub(crate) const MENU_BAR_HEIGHT: f32 = 44.0;
pub(crate) const MENU_BUTTON_WIDTH: f32 = 156.0;
pub(crate) const MENU_BAR_PADDING: f32 = 12.0;
pub(crate) const DROPDOWN_WIDTH: f32 = 260.0;
pub(crate) const DROPDOWN_ROW_HEIGHT: f32 = 32.0;
pub(crate) const SETTINGS_LABEL: &str = "Settings";

/// Read-only menu bar data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuBarViewModel<'a> {
    pub(crate) hovered_item: Option<&'a str>,
}

/// Open section of `cluster` together with its button index.
pub(crate) fn open_section(
    cluster: &'static Cluster,
    open_menu_id: Option<&str>,
) -> Option<(usize, &'static Section)> {
    let open_menu_id = open_menu_id?;
    cluster
        .sections
        .iter()
        .enumerate()
        .find(|(_, section)| section.id == open_menu_id)
}

/// Left offset of the dropdown under the section button at `index`.
pub(crate) fn dropdown_offset(index: usize) -> f32 {
    MENU_BAR_PADDING + index as f32 * MENU_BUTTON_WIDTH
}
