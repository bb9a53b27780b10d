mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{TopbarEffect, TopbarEvent};
use self::model::TopbarViewModel;
use self::state::TopbarState;

/// Application header with brand, panel toggles, profile and window controls.
pub(crate) struct TopbarWidget {
    state: TopbarState,
}

impl TopbarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: TopbarState::default(),
        }
    }

    /// Reduce a topbar event into state updates and effects.
    pub(crate) fn reduce(&mut self, event: TopbarEvent) -> Task<TopbarEffect> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> TopbarViewModel<'_> {
        TopbarViewModel {
            is_fullscreen: self.state.is_fullscreen(),
            unread_notifications: self.state.unread_notifications(),
            search: self.state.search(),
        }
    }
}
