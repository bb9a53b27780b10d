use super::model::DEFAULT_UNREAD_NOTIFICATIONS;

/// Topbar window and badge state.
#[derive(Debug)]
pub(super) struct TopbarState {
    is_fullscreen: bool,
    unread_notifications: u32,
    search: String,
}

impl Default for TopbarState {
    fn default() -> Self {
        Self {
            is_fullscreen: false,
            unread_notifications: DEFAULT_UNREAD_NOTIFICATIONS,
            search: String::new(),
        }
    }
}

impl TopbarState {
    pub(super) fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub(super) fn unread_notifications(&self) -> u32 {
        self.unread_notifications
    }

    pub(super) fn search(&self) -> &str {
        &self.search
    }

    pub(super) fn set_search(&mut self, query: String) {
        self.search = query;
    }

    /// Toggle fullscreen state and return the new value.
    pub(super) fn toggle_fullscreen(&mut self) -> bool {
        self.is_fullscreen = !self.is_fullscreen;
        self.is_fullscreen
    }
}
