pub(crate) const TITLE: &str = "Settings";
pub(crate) const ROW_HEIGHT: f32 = 32.0;

/// Read-only settings sidebar data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsSidebarViewModel<'a> {
    pub(crate) hovered_item: Option<&'a str>,
}
