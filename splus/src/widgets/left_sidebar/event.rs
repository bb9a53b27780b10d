/// UI events emitted by the left sidebar.
#[derive(Debug, Clone)]
pub(crate) enum LeftSidebarEvent {
    ClusterPressed(String),
    SectionToggled(String),
    ItemPressed(String),
    ToggleCollapsed,
    ResizeStarted,
    DragMoved { x: f32 },
    DragEnded,
    /// The route changed; `section_id` owns the new location.
    LocationChanged { section_id: Option<String> },
}

/// Effects produced by the left sidebar reducer.
#[derive(Debug, Clone)]
pub(crate) enum LeftSidebarEffect {
    SelectCluster(String),
    OpenItem(String),
    SetCollapsed(bool),
    WidthChanged(f32),
}
