use iced::mouse::ScrollDelta;

/// UI events emitted by the dock.
#[derive(Debug, Clone)]
pub(crate) enum DockEvent {
    ClusterPressed(String),
    ClusterHovered(Option<String>),
    Scrolled(ScrollDelta),
}

/// Effects produced by the dock reducer.
#[derive(Debug, Clone)]
pub(crate) enum DockEffect {
    SelectCluster(String),
    MagnificationChanged(f32),
}
