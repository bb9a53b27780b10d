use iced::Task;

use super::{App, AppEvent};
use crate::guards::{MenuGuard, overlay_guard};
use crate::routers;

/// Apply the overlay guard, then route the event to its owner.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    if !app.has_open_overlay() {
        return routers::route(app, event);
    }

    match overlay_guard(&event) {
        MenuGuard::Allow => routers::route(app, event),
        MenuGuard::Ignore => Task::none(),
        MenuGuard::Dismiss => {
            let dismiss = routers::dismiss_overlays(app);
            Task::batch(vec![dismiss, routers::route(app, event)])
        },
    }
}

#[cfg(test)]
mod tests {
    use splus_nav::storage::MemoryStore;

    use super::update;
    use crate::app::{App, AppEvent};
    use crate::widgets::pages::PagesEvent;
    use crate::widgets::theme_picker::ThemePickerEvent;
    use crate::widgets::topbar::TopbarEvent;

    fn app() -> App {
        let (app, _) = App::with_store(Box::new(MemoryStore::new()));
        app
    }

    #[test]
    fn given_open_dropdown_when_page_is_pressed_then_dropdown_closes() {
        let mut app = app();
        app.nav.toggle_menu("billing");

        let _ = update(
            &mut app,
            AppEvent::PagesUi(PagesEvent::NavigateTo(String::from("/"))),
        );

        assert_eq!(app.nav.open_menu_id(), None);
    }

    #[test]
    fn given_open_picker_when_topbar_is_pressed_then_picker_closes_and_event_runs()
     {
        let mut app = app();
        let _ = update(
            &mut app,
            AppEvent::ThemePickerUi(ThemePickerEvent::Toggle),
        );
        assert!(app.widgets.theme_picker.is_open());

        let _ = update(&mut app, AppEvent::TopbarUi(TopbarEvent::Logout));

        assert!(!app.widgets.theme_picker.is_open());
    }

    #[test]
    fn given_open_picker_when_escape_dismisses_then_picker_closes() {
        let mut app = app();
        let _ = update(
            &mut app,
            AppEvent::ThemePickerUi(ThemePickerEvent::Toggle),
        );

        let _ = update(&mut app, AppEvent::DismissOverlays);

        assert!(!app.widgets.theme_picker.is_open());
    }
}
