use crate::app::AppEvent;

/// Determines how the event loop should treat an incoming event while a
/// dropdown or the theme picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event and keep the overlay open.
    Ignore,
    /// Close the overlay, then dispatch.
    Dismiss,
}

/// Classify an incoming event when an overlay is open.
pub(crate) fn overlay_guard(event: &AppEvent) -> MenuGuard {
    use MenuGuard::*;

    match event {
        AppEvent::MenuBarUi(_) | AppEvent::ThemePickerUi(_) => Allow,
        AppEvent::TopbarUi(event) => {
            use crate::widgets::topbar::TopbarEvent as E;
            match event {
                E::ToggleThemePicker | E::StartWindowDrag => Allow,
                _ => Dismiss,
            }
        },
        AppEvent::DockUi(event) => {
            use crate::widgets::dock::DockEvent as E;
            match event {
                E::ClusterHovered(_) => Allow,
                E::Scrolled(_) => Ignore,
                E::ClusterPressed(_) => Dismiss,
            }
        },
        AppEvent::LeftSidebarUi(event) => {
            use crate::widgets::left_sidebar::LeftSidebarEvent as E;
            match event {
                E::DragMoved { .. }
                | E::DragEnded
                | E::LocationChanged { .. } => Allow,
                E::ResizeStarted => Ignore,
                _ => Dismiss,
            }
        },
        AppEvent::SettingsSidebarUi(event) => {
            use crate::widgets::settings_sidebar::SettingsSidebarEvent as E;
            match event {
                E::ItemHovered(_) => Allow,
                _ => Dismiss,
            }
        },
        AppEvent::AssistantUi(event) => {
            use crate::widgets::assistant::AssistantEvent as E;
            match event {
                E::ReplyArrived(_) | E::DragMoved { .. } | E::DragEnded => {
                    Allow
                },
                E::ResizeStarted => Ignore,
                _ => Dismiss,
            }
        },
        AppEvent::PagesUi(_) => Dismiss,
        AppEvent::TopbarEffect(_)
        | AppEvent::DockEffect(_)
        | AppEvent::MenuBarEffect(_)
        | AppEvent::LeftSidebarEffect(_)
        | AppEvent::SettingsSidebarEffect(_)
        | AppEvent::AssistantEffect(_)
        | AppEvent::ThemePickerEffect(_)
        | AppEvent::PagesEffect(_) => Allow,
        AppEvent::IcedReady
        | AppEvent::Navigate(_)
        | AppEvent::OpenItem(_)
        | AppEvent::SelectCluster(_)
        | AppEvent::NavigateBack
        | AppEvent::DismissOverlays => Allow,
        AppEvent::CursorMoved(_)
        | AppEvent::PointerReleased
        | AppEvent::Keyboard(_)
        | AppEvent::Window(_) => Allow,
    }
}

#[cfg(test)]
mod tests {
    use iced::mouse::ScrollDelta;

    use super::{MenuGuard, overlay_guard};
    use crate::app::AppEvent;
    use crate::widgets::dock::DockEvent;
    use crate::widgets::menu_bar::MenuBarEvent;
    use crate::widgets::pages::PagesEvent;
    use crate::widgets::theme_picker::ThemePickerEvent;
    use crate::widgets::topbar::TopbarEvent;

    #[test]
    fn given_menu_bar_event_when_guard_runs_then_event_is_allowed() {
        let guard = overlay_guard(&AppEvent::MenuBarUi(
            MenuBarEvent::ItemPressed(String::from("/billing/invoice/new")),
        ));
        assert_eq!(guard, MenuGuard::Allow);
    }

    #[test]
    fn given_picker_event_when_guard_runs_then_event_is_allowed() {
        let guard =
            overlay_guard(&AppEvent::ThemePickerUi(ThemePickerEvent::Reset));
        assert_eq!(guard, MenuGuard::Allow);
    }

    #[test]
    fn given_press_on_other_surface_when_guard_runs_then_overlay_is_dismissed()
    {
        let guards = [
            overlay_guard(&AppEvent::TopbarUi(TopbarEvent::ToggleAssistant)),
            overlay_guard(&AppEvent::DockUi(DockEvent::ClusterPressed(
                String::from("finance"),
            ))),
            overlay_guard(&AppEvent::PagesUi(PagesEvent::NavigateTo(
                String::from("/"),
            ))),
        ];
        assert!(guards.iter().all(|guard| *guard == MenuGuard::Dismiss));
    }

    #[test]
    fn given_dock_scroll_when_guard_runs_then_event_is_ignored() {
        let guard = overlay_guard(&AppEvent::DockUi(DockEvent::Scrolled(
            ScrollDelta::Lines { x: 0.0, y: 1.0 },
        )));
        assert_eq!(guard, MenuGuard::Ignore);
    }

    #[test]
    fn given_effect_or_window_event_when_guard_runs_then_event_is_allowed() {
        assert_eq!(
            overlay_guard(&AppEvent::NavigateBack),
            MenuGuard::Allow
        );
        assert_eq!(
            overlay_guard(&AppEvent::Window(iced::window::Event::Focused)),
            MenuGuard::Allow
        );
    }
}
