use iced::Task;

use super::event::{LeftSidebarEffect, LeftSidebarEvent};
use super::state::LeftSidebarState;
use crate::components::primitive::resize_handle::{DragGesture, ResizeEdge};

/// Read-only values the left sidebar reducer needs from the app.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftSidebarCtx {
    pub(crate) width: f32,
    pub(crate) collapsed: bool,
}

/// Reduce a left sidebar event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut LeftSidebarState,
    event: LeftSidebarEvent,
    ctx: &LeftSidebarCtx,
) -> Task<LeftSidebarEffect> {
    match event {
        LeftSidebarEvent::ClusterPressed(cluster_id) => {
            Task::done(LeftSidebarEffect::SelectCluster(cluster_id))
        },
        LeftSidebarEvent::SectionToggled(section_id) => {
            state.toggle_section(section_id);
            Task::none()
        },
        LeftSidebarEvent::ItemPressed(path) => {
            Task::done(LeftSidebarEffect::OpenItem(path))
        },
        LeftSidebarEvent::ToggleCollapsed => {
            state.end_drag();
            Task::done(LeftSidebarEffect::SetCollapsed(!ctx.collapsed))
        },
        LeftSidebarEvent::ResizeStarted => {
            state.begin_drag(DragGesture::new(ResizeEdge::Right, ctx.width));
            Task::none()
        },
        LeftSidebarEvent::DragMoved { x } => match state.drag_mut() {
            Some(gesture) => {
                Task::done(LeftSidebarEffect::WidthChanged(gesture.track(x)))
            },
            None => Task::none(),
        },
        LeftSidebarEvent::DragEnded => {
            state.end_drag();
            Task::none()
        },
        LeftSidebarEvent::LocationChanged { section_id } => {
            if let Some(section_id) = section_id {
                state.expand_section(&section_id);
            }
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: LeftSidebarCtx = LeftSidebarCtx {
        width: 240.0,
        collapsed: false,
    };

    #[test]
    fn given_section_toggled_twice_when_reduced_then_it_is_expanded_again() {
        let mut state = LeftSidebarState::default();

        let _ = reduce(
            &mut state,
            LeftSidebarEvent::SectionToggled(String::from("payroll")),
            &CTX,
        );
        assert!(state.collapsed_sections().contains("payroll"));

        let _ = reduce(
            &mut state,
            LeftSidebarEvent::SectionToggled(String::from("payroll")),
            &CTX,
        );
        assert!(!state.collapsed_sections().contains("payroll"));
    }

    #[test]
    fn given_collapsed_section_when_location_moves_into_it_then_it_expands() {
        let mut state = LeftSidebarState::default();
        state.toggle_section(String::from("leave"));
        state.toggle_section(String::from("roster"));

        let _ = reduce(
            &mut state,
            LeftSidebarEvent::LocationChanged {
                section_id: Some(String::from("leave")),
            },
            &CTX,
        );

        assert!(!state.collapsed_sections().contains("leave"));
        assert!(state.collapsed_sections().contains("roster"));
    }

    #[test]
    fn given_resize_started_when_released_then_drag_is_cleared() {
        let mut state = LeftSidebarState::default();

        let _ = reduce(&mut state, LeftSidebarEvent::ResizeStarted, &CTX);
        let _ = reduce(
            &mut state,
            LeftSidebarEvent::DragMoved { x: 240.0 },
            &CTX,
        );
        let gesture = state.drag().expect("drag started");
        assert_eq!(gesture.width_at(300.0), 300.0);

        let _ = reduce(&mut state, LeftSidebarEvent::DragEnded, &CTX);
        assert!(state.drag().is_none());
    }

    #[test]
    fn given_active_drag_when_collapsing_then_drag_is_cancelled() {
        let mut state = LeftSidebarState::default();
        let _ = reduce(&mut state, LeftSidebarEvent::ResizeStarted, &CTX);

        let _ = reduce(&mut state, LeftSidebarEvent::ToggleCollapsed, &CTX);

        assert!(state.drag().is_none());
    }
}
