use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::assistant::{AssistantCtx, AssistantEffect, AssistantEvent};

pub(crate) fn route_event(
    app: &mut App,
    event: AssistantEvent,
) -> Task<AppEvent> {
    let ctx = AssistantCtx {
        width: app.nav.right_sidebar_width(),
    };
    app.widgets
        .assistant
        .reduce(event, &ctx)
        .map(AppEvent::AssistantEffect)
}

pub(crate) fn route_effect(
    app: &mut App,
    effect: AssistantEffect,
) -> Task<AppEvent> {
    match effect {
        AssistantEffect::ReplyReady(reply) => {
            route_event(app, AssistantEvent::ReplyArrived(reply))
        },
        AssistantEffect::ClosePanel => {
            app.nav.set_ai_panel(false);
            Task::none()
        },
        AssistantEffect::WidthChanged(width) => {
            app.nav.set_right_sidebar_width(width);
            Task::none()
        },
    }
}

pub(crate) fn drag_moved(app: &mut App, x: f32) -> Task<AppEvent> {
    route_event(app, AssistantEvent::DragMoved { x })
}

pub(crate) fn drag_ended(app: &mut App) -> Task<AppEvent> {
    route_event(app, AssistantEvent::DragEnded)
}
