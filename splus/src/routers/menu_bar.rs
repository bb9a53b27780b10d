use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::menu_bar::{MenuBarEffect, MenuBarEvent};

pub(crate) fn route_event(
    app: &mut App,
    event: MenuBarEvent,
) -> Task<AppEvent> {
    app.widgets.menu_bar.reduce(event).map(AppEvent::MenuBarEffect)
}

/// Apply dropdown open state to the store or open the chosen item.
pub(crate) fn route_effect(
    app: &mut App,
    effect: MenuBarEffect,
) -> Task<AppEvent> {
    match effect {
        MenuBarEffect::ToggleMenu(section_id) => {
            app.nav.toggle_menu(&section_id);
            Task::none()
        },
        MenuBarEffect::CloseMenu => {
            app.nav.set_open_menu_id(None);
            Task::none()
        },
        MenuBarEffect::OpenItem(path) => Task::done(AppEvent::OpenItem(path)),
    }
}

#[cfg(test)]
mod tests {
    use splus_nav::storage::MemoryStore;

    use super::route_effect;
    use crate::app::App;
    use crate::widgets::menu_bar::MenuBarEffect;

    #[test]
    fn given_same_section_toggled_twice_when_routed_then_dropdown_closes() {
        let (mut app, _) = App::with_store(Box::new(MemoryStore::new()));
        let toggle = || MenuBarEffect::ToggleMenu(String::from("billing"));

        let _ = route_effect(&mut app, toggle());
        assert_eq!(app.nav.open_menu_id(), Some("billing"));

        let _ = route_effect(&mut app, toggle());
        assert_eq!(app.nav.open_menu_id(), None);
    }
}
