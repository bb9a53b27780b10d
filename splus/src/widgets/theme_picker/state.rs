use splus_nav::Theme;
use splus_nav::theme::{CustomThemeInput, is_hex_color_prefix};

use super::model::PickerTab;

/// Custom color field being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ColorField {
    Primary,
    Sidebar,
    Canvas,
}

/// Popover visibility, selected tab and custom color drafts.
#[derive(Debug, Default)]
pub(super) struct ThemePickerState {
    open: bool,
    tab: PickerTab,
    input: CustomThemeInput,
}

impl ThemePickerState {
    pub(super) fn is_open(&self) -> bool {
        self.open
    }

    pub(super) fn tab(&self) -> PickerTab {
        self.tab
    }

    pub(super) fn input(&self) -> &CustomThemeInput {
        &self.input
    }

    /// Open the popover with drafts seeded from the active theme.
    pub(super) fn open(&mut self, active: &Theme) {
        self.open = true;
        self.input = if active.is_custom() {
            CustomThemeInput::from_theme(active)
        } else {
            CustomThemeInput::default()
        };
    }

    pub(super) fn close(&mut self) {
        self.open = false;
    }

    pub(super) fn select_tab(&mut self, tab: PickerTab) {
        self.tab = tab;
    }

    /// Store a partially typed color; returns `false` for rejected input.
    pub(super) fn edit(&mut self, field: ColorField, value: String) -> bool {
        if !value.is_empty() && !is_hex_color_prefix(&value) {
            return false;
        }

        let slot = match field {
            ColorField::Primary => &mut self.input.primary,
            ColorField::Sidebar => &mut self.input.sidebar,
            ColorField::Canvas => &mut self.input.canvas,
        };
        *slot = value;
        true
    }
}
