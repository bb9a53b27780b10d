use iced::Task;
use iced::mouse::ScrollDelta;

use super::event::{DockEffect, DockEvent};
use super::model::next_magnification;
use super::state::DockState;

/// Read-only values the dock reducer needs from the app.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DockCtx {
    pub(crate) magnification: f32,
}

/// Reduce a dock event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut DockState,
    event: DockEvent,
    ctx: &DockCtx,
) -> Task<DockEffect> {
    match event {
        DockEvent::ClusterPressed(cluster_id) => {
            Task::done(DockEffect::SelectCluster(cluster_id))
        },
        DockEvent::ClusterHovered(cluster_id) => {
            state.set_hovered(cluster_id);
            Task::none()
        },
        DockEvent::Scrolled(delta) => {
            let (ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. }) =
                delta;
            let next = next_magnification(ctx.magnification, y);
            if next == ctx.magnification {
                return Task::none();
            }
            Task::done(DockEffect::MagnificationChanged(next))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: DockCtx = DockCtx {
        magnification: 56.0,
    };

    #[test]
    fn given_hover_events_when_reduced_then_hovered_cluster_tracks_pointer() {
        let mut state = DockState::default();

        let _ = reduce(
            &mut state,
            DockEvent::ClusterHovered(Some(String::from("finance"))),
            &CTX,
        );
        assert_eq!(state.hovered(), Some("finance"));

        let _ = reduce(&mut state, DockEvent::ClusterHovered(None), &CTX);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn given_cluster_press_when_reduced_then_hover_state_is_kept() {
        let mut state = DockState::default();
        state.set_hovered(Some(String::from("core")));

        let _ = reduce(
            &mut state,
            DockEvent::ClusterPressed(String::from("core")),
            &CTX,
        );

        assert_eq!(state.hovered(), Some("core"));
    }
}
