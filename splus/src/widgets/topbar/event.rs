use iced::window;

/// UI events emitted by the topbar.
#[derive(Debug, Clone)]
pub(crate) enum TopbarEvent {
    BrandPressed,
    /// Search box text; not wired to any lookup.
    SearchChanged(String),
    ToggleAssistant,
    ToggleThemePicker,
    Logout,
    StartWindowDrag,
    ToggleFullScreen,
    MinimizeWindow,
    CloseWindow,
}

/// Effects produced by the topbar reducer.
#[derive(Debug, Clone)]
pub(crate) enum TopbarEffect {
    Navigate(String),
    ToggleAssistant,
    ToggleThemePicker,
    FullScreenToggled { mode: window::Mode },
    MinimizeWindow,
    CloseWindow,
    StartWindowDrag,
}
