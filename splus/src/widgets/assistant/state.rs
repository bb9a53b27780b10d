use super::model::{ChatMessage, INITIAL_MESSAGE};
use crate::components::primitive::resize_handle::DragGesture;

/// Conversation, draft and resize state of the assistant panel.
#[derive(Debug)]
pub(super) struct AssistantState {
    messages: Vec<ChatMessage>,
    draft: String,
    pending_replies: usize,
    drag: Option<DragGesture>,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(INITIAL_MESSAGE)],
            draft: String::new(),
            pending_replies: 0,
            drag: None,
        }
    }
}

impl AssistantState {
    pub(super) fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub(super) fn draft(&self) -> &str {
        &self.draft
    }

    pub(super) fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub(super) fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Move the trimmed draft into the conversation. Returns the sent text,
    /// or `None` when the draft is blank.
    pub(super) fn take_draft(&mut self) -> Option<String> {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.draft.clear();
        self.messages.push(ChatMessage::user(text.clone()));
        self.pending_replies += 1;
        Some(text)
    }

    pub(super) fn push_reply(&mut self, text: String) {
        self.messages.push(ChatMessage::assistant(text));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    pub(super) fn drag(&self) -> Option<DragGesture> {
        self.drag
    }

    pub(super) fn drag_mut(&mut self) -> Option<&mut DragGesture> {
        self.drag.as_mut()
    }

    pub(super) fn begin_drag(&mut self, gesture: DragGesture) {
        self.drag = Some(gesture);
    }

    pub(super) fn end_drag(&mut self) {
        self.drag = None;
    }
}
