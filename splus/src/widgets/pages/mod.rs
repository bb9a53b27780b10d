mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{PagesEffect, PagesEvent};
use self::model::PagesViewModel;
use self::state::PagesState;

/// Routed page content rendered inside the shell.
pub(crate) struct PagesWidget {
    state: PagesState,
}

impl PagesWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: PagesState::default(),
        }
    }

    pub(crate) fn reduce(&mut self, event: PagesEvent) -> Task<PagesEffect> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> PagesViewModel<'_> {
        PagesViewModel {
            login_method: self.state.login_method(),
            identifier: self.state.identifier(),
            otp: self.state.otp(),
        }
    }
}
