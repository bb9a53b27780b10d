/// UI events emitted by the menu bar and its dropdown.
#[derive(Debug, Clone)]
pub(crate) enum MenuBarEvent {
    SectionPressed(String),
    ItemPressed(String),
    ItemHovered(Option<String>),
    Dismiss,
}

/// Effects produced by the menu bar reducer.
#[derive(Debug, Clone)]
pub(crate) enum MenuBarEffect {
    ToggleMenu(String),
    CloseMenu,
    OpenItem(String),
}
