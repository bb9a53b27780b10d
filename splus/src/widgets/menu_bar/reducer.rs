use iced::Task;

use super::event::{MenuBarEffect, MenuBarEvent};
use super::state::MenuBarState;

/// Reduce a menu bar event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut MenuBarState,
    event: MenuBarEvent,
) -> Task<MenuBarEffect> {
    match event {
        MenuBarEvent::SectionPressed(section_id) => {
            state.set_hovered_item(None);
            Task::done(MenuBarEffect::ToggleMenu(section_id))
        },
        MenuBarEvent::ItemPressed(path) => {
            state.set_hovered_item(None);
            Task::done(MenuBarEffect::OpenItem(path))
        },
        MenuBarEvent::ItemHovered(path) => {
            state.set_hovered_item(path);
            Task::none()
        },
        MenuBarEvent::Dismiss => {
            state.set_hovered_item(None);
            Task::done(MenuBarEffect::CloseMenu)
        },
    }
}
