mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{LeftSidebarEffect, LeftSidebarEvent};
use self::model::LeftSidebarViewModel;
pub(crate) use self::reducer::LeftSidebarCtx;
use self::state::LeftSidebarState;

/// Cluster navigation panel on the left edge of the shell.
pub(crate) struct LeftSidebarWidget {
    state: LeftSidebarState,
}

impl LeftSidebarWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: LeftSidebarState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: LeftSidebarEvent,
        ctx: &LeftSidebarCtx,
    ) -> Task<LeftSidebarEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> LeftSidebarViewModel<'_> {
        LeftSidebarViewModel {
            collapsed_sections: self.state.collapsed_sections(),
            is_dragging: self.is_dragging(),
        }
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.state.drag().is_some()
    }
}
