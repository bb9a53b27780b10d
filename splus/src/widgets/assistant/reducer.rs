use std::time::Duration;

use iced::Task;

use super::event::{AssistantEffect, AssistantEvent};
use super::model::{REPLY_DELAY_MS, reply_for};
use super::state::AssistantState;
use crate::components::primitive::resize_handle::{DragGesture, ResizeEdge};

/// Read-only values the assistant reducer needs from the app.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AssistantCtx {
    pub(crate) width: f32,
}

/// Reduce an assistant event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut AssistantState,
    event: AssistantEvent,
    ctx: &AssistantCtx,
) -> Task<AssistantEffect> {
    match event {
        AssistantEvent::DraftChanged(draft) => {
            state.set_draft(draft);
            Task::none()
        },
        AssistantEvent::Submit => send(state),
        AssistantEvent::SuggestionPressed(prompt) => {
            state.set_draft(prompt.to_string());
            send(state)
        },
        AssistantEvent::ReplyArrived(text) => {
            state.push_reply(text);
            Task::none()
        },
        AssistantEvent::Close => {
            state.end_drag();
            Task::done(AssistantEffect::ClosePanel)
        },
        AssistantEvent::ResizeStarted => {
            state.begin_drag(DragGesture::new(ResizeEdge::Left, ctx.width));
            Task::none()
        },
        AssistantEvent::DragMoved { x } => match state.drag_mut() {
            Some(gesture) => {
                Task::done(AssistantEffect::WidthChanged(gesture.track(x)))
            },
            None => Task::none(),
        },
        AssistantEvent::DragEnded => {
            state.end_drag();
            Task::none()
        },
    }
}

fn send(state: &mut AssistantState) -> Task<AssistantEffect> {
    let Some(query) = state.take_draft() else {
        return Task::none();
    };

    let reply = reply_for(&query);
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(REPLY_DELAY_MS)).await;
            reply
        },
        |reply| AssistantEffect::ReplyReady(reply.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::assistant::model::{
        ChatMessage, ChatRole, SUGGESTIONS, shows_suggestions,
    };

    const CTX: AssistantCtx = AssistantCtx { width: 320.0 };

    #[test]
    fn given_new_panel_when_inspected_then_greeting_is_the_only_message() {
        let state = AssistantState::default();
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].role, ChatRole::Assistant);
        assert!(!state.is_typing());
    }

    #[test]
    fn given_blank_draft_when_submitting_then_nothing_is_sent() {
        let mut state = AssistantState::default();
        let _ = reduce(
            &mut state,
            AssistantEvent::DraftChanged(String::from("   ")),
            &CTX,
        );

        let _ = reduce(&mut state, AssistantEvent::Submit, &CTX);

        assert_eq!(state.messages().len(), 1);
        assert!(!state.is_typing());
        assert_eq!(state.draft(), "   ");
    }

    #[test]
    fn given_draft_when_submitting_then_trimmed_message_is_appended_and_typing_starts()
     {
        let mut state = AssistantState::default();
        let _ = reduce(
            &mut state,
            AssistantEvent::DraftChanged(String::from("  who is on leave? ")),
            &CTX,
        );

        let _ = reduce(&mut state, AssistantEvent::Submit, &CTX);

        assert_eq!(
            state.messages().last(),
            Some(&ChatMessage::user("who is on leave?"))
        );
        assert_eq!(state.draft(), "");
        assert!(state.is_typing());
    }

    #[test]
    fn given_fresh_panel_when_suggestion_pressed_then_it_is_sent() {
        let mut state = AssistantState::default();
        assert!(shows_suggestions(state.messages()));

        let _ = reduce(
            &mut state,
            AssistantEvent::SuggestionPressed(SUGGESTIONS[0]),
            &CTX,
        );

        assert_eq!(
            state.messages().last(),
            Some(&ChatMessage::user("Who is on leave today?"))
        );
        assert_eq!(state.draft(), "");
        assert!(state.is_typing());
        assert!(!shows_suggestions(state.messages()));
    }

    #[test]
    fn given_pending_reply_when_it_arrives_then_typing_stops() {
        let mut state = AssistantState::default();
        state.set_draft(String::from("headcount"));
        let _ = reduce(&mut state, AssistantEvent::Submit, &CTX);

        let _ = reduce(
            &mut state,
            AssistantEvent::ReplyArrived(String::from("1,245")),
            &CTX,
        );

        assert!(!state.is_typing());
        assert_eq!(state.messages().len(), 3);
        assert_eq!(
            state.messages().last(),
            Some(&ChatMessage::assistant("1,245"))
        );
    }

    #[test]
    fn given_left_edge_drag_when_started_then_gesture_grows_leftwards() {
        let mut state = AssistantState::default();

        let _ = reduce(&mut state, AssistantEvent::ResizeStarted, &CTX);
        let _ = reduce(
            &mut state,
            AssistantEvent::DragMoved { x: 900.0 },
            &CTX,
        );

        let gesture = state.drag().expect("drag started");
        assert_eq!(gesture.width_at(850.0), 370.0);
    }
}
