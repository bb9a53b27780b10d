mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{DockEffect, DockEvent};
use self::model::DockViewModel;
pub(crate) use self::reducer::DockCtx;
use self::state::DockState;

/// Floating cluster switcher at the bottom of the window.
pub(crate) struct DockWidget {
    state: DockState,
}

impl DockWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: DockState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: DockEvent,
        ctx: &DockCtx,
    ) -> Task<DockEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> DockViewModel<'_> {
        DockViewModel {
            hovered: self.state.hovered(),
        }
    }
}
