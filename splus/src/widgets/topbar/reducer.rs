use iced::{Task, window};

use super::event::{TopbarEffect, TopbarEvent};
use super::state::TopbarState;
use crate::state::{HOME_PATH, LOGIN_PATH};

/// Reduce a topbar event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut TopbarState,
    event: TopbarEvent,
) -> Task<TopbarEffect> {
    match event {
        TopbarEvent::BrandPressed => {
            Task::done(TopbarEffect::Navigate(HOME_PATH.to_string()))
        },
        TopbarEvent::SearchChanged(query) => {
            state.set_search(query);
            Task::none()
        },
        TopbarEvent::ToggleAssistant => {
            Task::done(TopbarEffect::ToggleAssistant)
        },
        TopbarEvent::ToggleThemePicker => {
            Task::done(TopbarEffect::ToggleThemePicker)
        },
        TopbarEvent::Logout => {
            log::info!("signing out");
            Task::done(TopbarEffect::Navigate(LOGIN_PATH.to_string()))
        },
        TopbarEvent::ToggleFullScreen => {
            let mode = if state.toggle_fullscreen() {
                window::Mode::Fullscreen
            } else {
                window::Mode::Windowed
            };
            Task::done(TopbarEffect::FullScreenToggled { mode })
        },
        TopbarEvent::MinimizeWindow => Task::done(TopbarEffect::MinimizeWindow),
        TopbarEvent::CloseWindow => Task::done(TopbarEffect::CloseWindow),
        TopbarEvent::StartWindowDrag => {
            Task::done(TopbarEffect::StartWindowDrag)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_windowed_state_when_toggling_fullscreen_twice_then_state_returns()
    {
        let mut state = TopbarState::default();
        assert!(!state.is_fullscreen());

        let _ = reduce(&mut state, TopbarEvent::ToggleFullScreen);
        assert!(state.is_fullscreen());

        let _ = reduce(&mut state, TopbarEvent::ToggleFullScreen);
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn given_non_window_events_when_reduced_then_state_is_preserved() {
        let mut state = TopbarState::default();

        let _ = reduce(&mut state, TopbarEvent::Logout);
        let _ = reduce(&mut state, TopbarEvent::ToggleAssistant);
        let _ = reduce(&mut state, TopbarEvent::MinimizeWindow);

        assert!(!state.is_fullscreen());
        assert_eq!(state.unread_notifications(), 3);
    }

    #[test]
    fn given_typed_query_when_reduced_then_search_text_is_kept() {
        let mut state = TopbarState::default();

        let _ = reduce(
            &mut state,
            TopbarEvent::SearchChanged(String::from("payroll")),
        );

        assert_eq!(state.search(), "payroll");
        assert!(!state.is_fullscreen());
    }
}
