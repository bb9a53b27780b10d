use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::left_sidebar::{
    LeftSidebarCtx, LeftSidebarEffect, LeftSidebarEvent,
};

pub(crate) fn route_event(
    app: &mut App,
    event: LeftSidebarEvent,
) -> Task<AppEvent> {
    let ctx = LeftSidebarCtx {
        width: app.nav.left_sidebar_width(),
        collapsed: app.nav.left_sidebar_collapsed(),
    };
    app.widgets
        .left_sidebar
        .reduce(event, &ctx)
        .map(AppEvent::LeftSidebarEffect)
}

pub(crate) fn route_effect(
    app: &mut App,
    effect: LeftSidebarEffect,
) -> Task<AppEvent> {
    match effect {
        LeftSidebarEffect::SelectCluster(id) => {
            Task::done(AppEvent::SelectCluster(id))
        },
        LeftSidebarEffect::OpenItem(path) => {
            Task::done(AppEvent::OpenItem(path))
        },
        LeftSidebarEffect::SetCollapsed(collapsed) => {
            app.nav.set_left_sidebar_collapsed(collapsed);
            Task::none()
        },
        LeftSidebarEffect::WidthChanged(width) => {
            app.nav.set_left_sidebar_width(width);
            Task::none()
        },
    }
}

pub(crate) fn drag_moved(app: &mut App, x: f32) -> Task<AppEvent> {
    route_event(app, LeftSidebarEvent::DragMoved { x })
}

pub(crate) fn drag_ended(app: &mut App) -> Task<AppEvent> {
    route_event(app, LeftSidebarEvent::DragEnded)
}

#[cfg(test)]
mod tests {
    use splus_nav::storage::MemoryStore;

    use super::route_effect;
    use crate::app::App;
    use crate::widgets::left_sidebar::LeftSidebarEffect;

    #[test]
    fn given_oversized_width_when_routed_then_store_clamps_it() {
        let (mut app, _) = App::with_store(Box::new(MemoryStore::new()));

        let _ = route_effect(&mut app, LeftSidebarEffect::WidthChanged(900.0));

        assert_eq!(app.nav.left_sidebar_width(), 420.0);
    }
}
