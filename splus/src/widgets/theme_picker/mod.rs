mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ThemePickerEffect, ThemePickerEvent};
use self::model::ThemePickerViewModel;
pub(crate) use self::reducer::ThemePickerCtx;
use self::state::ThemePickerState;

/// Preset and custom palette popover opened from the topbar.
pub(crate) struct ThemePickerWidget {
    state: ThemePickerState,
}

impl ThemePickerWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: ThemePickerState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: ThemePickerEvent,
        ctx: &ThemePickerCtx<'_>,
    ) -> Task<ThemePickerEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> ThemePickerViewModel<'_> {
        ThemePickerViewModel {
            tab: self.state.tab(),
            input: self.state.input(),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }
}
