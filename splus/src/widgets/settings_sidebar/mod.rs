mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{SettingsSidebarEffect, SettingsSidebarEvent};
use self::model::SettingsSidebarViewModel;
use self::state::SettingsSidebarState;

/// Flat settings list shown while the system cluster is active.
pub(crate) struct SettingsSidebarWidget {
    state: SettingsSidebarState,
}

impl SettingsSidebarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: SettingsSidebarState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: SettingsSidebarEvent,
    ) -> Task<SettingsSidebarEffect> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> SettingsSidebarViewModel<'_> {
        SettingsSidebarViewModel {
            hovered_item: self.state.hovered_item(),
        }
    }
}
