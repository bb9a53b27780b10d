/// Hover tracking for dock tiles.
#[derive(Debug, Default)]
pub(super) struct DockState {
    hovered: Option<String>,
}

impl DockState {
    pub(super) fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub(super) fn set_hovered(&mut self, cluster_id: Option<String>) {
        self.hovered = cluster_id;
    }
}
