/// UI events emitted by the assistant panel.
#[derive(Debug, Clone)]
pub(crate) enum AssistantEvent {
    DraftChanged(String),
    Submit,
    /// A suggested prompt was picked; it is sent as if typed.
    SuggestionPressed(&'static str),
    /// The delayed reply for an earlier submit is ready.
    ReplyArrived(String),
    Close,
    ResizeStarted,
    DragMoved { x: f32 },
    DragEnded,
}

/// Effects produced by the assistant reducer.
#[derive(Debug, Clone)]
pub(crate) enum AssistantEffect {
    ReplyReady(String),
    ClosePanel,
    WidthChanged(f32),
}
