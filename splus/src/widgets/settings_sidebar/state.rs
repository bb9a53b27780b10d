#[derive(Debug, Default)]
pub(super) struct SettingsSidebarState {
    hovered_item: Option<String>,
}

impl SettingsSidebarState {
    pub(super) fn hovered_item(&self) -> Option<&str> {
        self.hovered_item.as_deref()
    }

    pub(super) fn set_hovered_item(&mut self, path: Option<String>) {
        self.hovered_item = path;
    }
}
