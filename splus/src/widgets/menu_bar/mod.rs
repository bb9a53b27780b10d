mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{MenuBarEffect, MenuBarEvent};
use self::model::MenuBarViewModel;
use self::state::MenuBarState;

/// Horizontal section menu above the page with its dropdown.
pub(crate) struct MenuBarWidget {
    state: MenuBarState,
}

impl MenuBarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: MenuBarState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: MenuBarEvent,
    ) -> Task<MenuBarEffect> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> MenuBarViewModel<'_> {
        MenuBarViewModel {
            hovered_item: self.state.hovered_item(),
        }
    }
}
