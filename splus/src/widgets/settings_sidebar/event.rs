/// UI events emitted by the settings sidebar.
#[derive(Debug, Clone)]
pub(crate) enum SettingsSidebarEvent {
    ItemPressed(String),
    ItemHovered(Option<String>),
    Collapse,
}

/// Effects produced by the settings sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum SettingsSidebarEffect {
    OpenItem(String),
    Collapse,
}
