use iced::{Event, Subscription, event, mouse, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    let key_subs = iced::keyboard::listen().map(AppEvent::Keyboard);

    let mut subs = vec![win_subs, key_subs];

    // Pointer tracking lives only as long as a resize drag.
    if app.is_resizing() {
        subs.push(event::listen_with(drag_pointer_event));
    }

    Subscription::batch(subs)
}

fn drag_pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<AppEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(AppEvent::CursorMoved(position))
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft) => {
            Some(AppEvent::PointerReleased)
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::{Event, Point, event, mouse, window};
    use splus_nav::storage::MemoryStore;

    use super::drag_pointer_event;
    use crate::app::{App, AppEvent};
    use crate::widgets::assistant::AssistantEvent;
    use crate::widgets::left_sidebar::LeftSidebarEvent;

    fn map(event: Event) -> Option<AppEvent> {
        drag_pointer_event(event, event::Status::Ignored, window::Id::unique())
    }

    #[test]
    fn given_resize_handle_press_when_released_then_tracking_stops() {
        let (mut app, _) = App::with_store(Box::new(MemoryStore::new()));
        assert!(!app.is_resizing());

        let _ = app.update(AppEvent::LeftSidebarUi(
            LeftSidebarEvent::ResizeStarted,
        ));
        assert!(app.is_resizing());

        let _ = app.update(AppEvent::PointerReleased);
        assert!(!app.is_resizing());
    }

    #[test]
    fn given_assistant_drag_when_pointer_moves_then_only_assistant_drags() {
        let (mut app, _) = App::with_store(Box::new(MemoryStore::new()));
        let _ = app.update(AppEvent::AssistantUi(
            AssistantEvent::ResizeStarted,
        ));
        assert!(app.is_resizing());

        let _ = app.update(AppEvent::CursorMoved(Point::new(900.0, 10.0)));
        let _ = app.update(AppEvent::CursorMoved(Point::new(860.0, 10.0)));

        assert!(app.widgets.assistant.is_dragging());
        assert!(!app.widgets.left_sidebar.is_dragging());
    }

    #[test]
    fn given_pointer_events_when_mapping_then_only_moves_and_releases_pass() {
        let moved = map(Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(12.0, 4.0),
        }));
        assert!(matches!(
            moved,
            Some(AppEvent::CursorMoved(position)) if position.x == 12.0
        ));

        let released = map(Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )));
        assert!(matches!(released, Some(AppEvent::PointerReleased)));

        let pressed = map(Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        )));
        assert!(pressed.is_none());
    }
}
