/// Dropdown row hover tracking.
#[derive(Debug, Default)]
pub(super) struct MenuBarState {
    hovered_item: Option<String>,
}

impl MenuBarState {
    pub(super) fn hovered_item(&self) -> Option<&str> {
        self.hovered_item.as_deref()
    }

    pub(super) fn set_hovered_item(&mut self, path: Option<String>) {
        self.hovered_item = path;
    }
}
