use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::dock::{DockCtx, DockEffect, DockEvent};

pub(crate) fn route_event(app: &mut App, event: DockEvent) -> Task<AppEvent> {
    let ctx = DockCtx {
        magnification: app.nav.dock_magnification(),
    };
    app.widgets.dock.reduce(event, &ctx).map(AppEvent::DockEffect)
}

pub(crate) fn route_effect(
    app: &mut App,
    effect: DockEffect,
) -> Task<AppEvent> {
    match effect {
        DockEffect::SelectCluster(id) => {
            Task::done(AppEvent::SelectCluster(id))
        },
        DockEffect::MagnificationChanged(magnification) => {
            app.nav.set_dock_magnification(magnification);
            Task::none()
        },
    }
}
