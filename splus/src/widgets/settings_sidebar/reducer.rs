use iced::Task;

use super::event::{SettingsSidebarEffect, SettingsSidebarEvent};
use super::state::SettingsSidebarState;

/// Reduce a settings sidebar event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut SettingsSidebarState,
    event: SettingsSidebarEvent,
) -> Task<SettingsSidebarEffect> {
    match event {
        SettingsSidebarEvent::ItemPressed(path) => {
            Task::done(SettingsSidebarEffect::OpenItem(path))
        },
        SettingsSidebarEvent::ItemHovered(path) => {
            state.set_hovered_item(path);
            Task::none()
        },
        SettingsSidebarEvent::Collapse => {
            state.set_hovered_item(None);
            Task::done(SettingsSidebarEffect::Collapse)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_hover_enter_and_exit_when_reduced_then_hovered_row_follows() {
        let mut state = SettingsSidebarState::default();

        let _ = reduce(
            &mut state,
            SettingsSidebarEvent::ItemHovered(Some(String::from(
                "/settings/company",
            ))),
        );
        assert_eq!(state.hovered_item(), Some("/settings/company"));

        let _ = reduce(&mut state, SettingsSidebarEvent::ItemHovered(None));
        assert_eq!(state.hovered_item(), None);
    }

    #[test]
    fn given_hovered_row_when_collapsing_then_hover_is_cleared() {
        let mut state = SettingsSidebarState::default();
        state.set_hovered_item(Some(String::from("/settings/log")));

        let _ = reduce(&mut state, SettingsSidebarEvent::Collapse);

        assert_eq!(state.hovered_item(), None);
    }
}
