use splus_nav::Theme;

use super::model::PickerTab;

/// UI events emitted by the theme picker popover.
#[derive(Debug, Clone)]
pub(crate) enum ThemePickerEvent {
    Toggle,
    Close,
    TabSelected(PickerTab),
    PresetSelected(String),
    PrimaryChanged(String),
    SidebarChanged(String),
    CanvasChanged(String),
    ApplyCustom,
    Reset,
}

/// Effects produced by the theme picker reducer.
#[derive(Debug, Clone)]
pub(crate) enum ThemePickerEffect {
    ApplyPreset(String),
    ApplyCustom(Theme),
    ResetTheme,
}
