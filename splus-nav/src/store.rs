use std::ops::RangeInclusive;

use crate::taxonomy::HOME_CLUSTER_ID;

pub const LEFT_SIDEBAR_WIDTH_RANGE: RangeInclusive<f32> = 180.0..=420.0;
pub const RIGHT_SIDEBAR_WIDTH_RANGE: RangeInclusive<f32> = 260.0..=520.0;
pub const DOCK_MAGNIFICATION_RANGE: RangeInclusive<f32> = 32.0..=80.0;

const DEFAULT_LEFT_SIDEBAR_WIDTH: f32 = 240.0;
const DEFAULT_RIGHT_SIDEBAR_WIDTH: f32 = 320.0;
const DEFAULT_DOCK_MAGNIFICATION: f32 = 56.0;

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

/// Cross-surface UI state for one running shell.
///
/// Fields are private so every write goes through a setter and the width
/// and magnification bounds always hold.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    active_cluster_id: String,
    open_menu_id: Option<String>,
    ai_panel_open: bool,
    left_sidebar_width: f32,
    left_sidebar_collapsed: bool,
    right_sidebar_width: f32,
    dock_magnification: f32,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_cluster_id: HOME_CLUSTER_ID.to_string(),
            open_menu_id: None,
            ai_panel_open: true,
            left_sidebar_width: DEFAULT_LEFT_SIDEBAR_WIDTH,
            left_sidebar_collapsed: false,
            right_sidebar_width: DEFAULT_RIGHT_SIDEBAR_WIDTH,
            dock_magnification: DEFAULT_DOCK_MAGNIFICATION,
        }
    }
}

impl NavigationState {
    pub fn active_cluster_id(&self) -> &str {
        &self.active_cluster_id
    }

    pub fn open_menu_id(&self) -> Option<&str> {
        self.open_menu_id.as_deref()
    }

    pub fn ai_panel_open(&self) -> bool {
        self.ai_panel_open
    }

    pub fn left_sidebar_width(&self) -> f32 {
        self.left_sidebar_width
    }

    pub fn left_sidebar_collapsed(&self) -> bool {
        self.left_sidebar_collapsed
    }

    pub fn right_sidebar_width(&self) -> f32 {
        self.right_sidebar_width
    }

    pub fn dock_magnification(&self) -> f32 {
        self.dock_magnification
    }

    pub fn set_active_cluster(&mut self, id: impl Into<String>) {
        self.active_cluster_id = id.into();
    }

    pub fn set_open_menu_id(&mut self, id: Option<String>) {
        self.open_menu_id = id;
    }

    /// Open `id`, or close it when it is already the open menu.
    pub fn toggle_menu(&mut self, id: &str) {
        if self.open_menu_id.as_deref() == Some(id) {
            self.open_menu_id = None;
        } else {
            self.open_menu_id = Some(id.to_string());
        }
    }

    pub fn toggle_ai_panel(&mut self) {
        self.ai_panel_open = !self.ai_panel_open;
    }

    pub fn set_ai_panel(&mut self, open: bool) {
        self.ai_panel_open = open;
    }

    pub fn set_left_sidebar_width(&mut self, width: f32) {
        self.left_sidebar_width = clamp_to(width, &LEFT_SIDEBAR_WIDTH_RANGE);
    }

    pub fn set_left_sidebar_collapsed(&mut self, collapsed: bool) {
        self.left_sidebar_collapsed = collapsed;
    }

    pub fn set_right_sidebar_width(&mut self, width: f32) {
        self.right_sidebar_width = clamp_to(width, &RIGHT_SIDEBAR_WIDTH_RANGE);
    }

    pub fn set_dock_magnification(&mut self, magnification: f32) {
        self.dock_magnification =
            clamp_to(magnification, &DOCK_MAGNIFICATION_RANGE);
    }
}
