use iced::{Task, window};

use crate::app::{App, AppEvent};
use crate::widgets::theme_picker::ThemePickerEvent;
use crate::widgets::topbar::{TopbarEffect, TopbarEvent};

/// Route a topbar UI event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: TopbarEvent) -> Task<AppEvent> {
    app.widgets.topbar.reduce(event).map(AppEvent::TopbarEffect)
}

/// Route a topbar effect to navigation, panels or the window.
pub(crate) fn route_effect(
    app: &mut App,
    effect: TopbarEffect,
) -> Task<AppEvent> {
    match effect {
        TopbarEffect::Navigate(path) => Task::done(AppEvent::Navigate(path)),
        TopbarEffect::ToggleAssistant => {
            app.nav.toggle_ai_panel();
            Task::none()
        },
        TopbarEffect::ToggleThemePicker => {
            app.nav.set_open_menu_id(None);
            Task::done(AppEvent::ThemePickerUi(ThemePickerEvent::Toggle))
        },
        TopbarEffect::FullScreenToggled { mode } => {
            window::latest().and_then(move |id| window::set_mode(id, mode))
        },
        TopbarEffect::MinimizeWindow => {
            window::latest().and_then(|id| window::minimize(id, true))
        },
        TopbarEffect::CloseWindow => window::latest().and_then(window::close),
        TopbarEffect::StartWindowDrag => {
            window::latest().and_then(window::drag)
        },
    }
}

#[cfg(test)]
mod tests {
    use splus_nav::storage::MemoryStore;

    use super::route_effect;
    use crate::app::App;
    use crate::widgets::topbar::TopbarEffect;

    #[test]
    fn given_open_assistant_when_toggled_then_panel_closes() {
        let (mut app, _) = App::with_store(Box::new(MemoryStore::new()));
        assert!(app.nav.ai_panel_open());

        let _ = route_effect(&mut app, TopbarEffect::ToggleAssistant);

        assert!(!app.nav.ai_panel_open());
    }
}
