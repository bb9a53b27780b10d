use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::pages::{PagesEffect, PagesEvent};

pub(crate) fn route_event(app: &mut App, event: PagesEvent) -> Task<AppEvent> {
    app.widgets.pages.reduce(event).map(AppEvent::PagesEffect)
}

pub(crate) fn route_effect(effect: PagesEffect) -> Task<AppEvent> {
    match effect {
        PagesEffect::Navigate(path) => Task::done(AppEvent::Navigate(path)),
    }
}
