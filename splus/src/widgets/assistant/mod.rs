mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{AssistantEffect, AssistantEvent};
use self::model::AssistantViewModel;
pub(crate) use self::reducer::AssistantCtx;
use self::state::AssistantState;

/// Mock AI chat panel on the right edge of the shell.
pub(crate) struct AssistantWidget {
    state: AssistantState,
}

impl AssistantWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: AssistantState::default(),
        }
    }

    pub(crate) fn reduce(
        &mut self,
        event: AssistantEvent,
        ctx: &AssistantCtx,
    ) -> Task<AssistantEffect> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> AssistantViewModel<'_> {
        AssistantViewModel {
            messages: self.state.messages(),
            draft: self.state.draft(),
            is_typing: self.state.is_typing(),
            is_dragging: self.is_dragging(),
        }
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.state.drag().is_some()
    }
}
