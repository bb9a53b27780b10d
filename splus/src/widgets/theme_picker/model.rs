use splus_nav::Theme;
use splus_nav::theme::{CustomThemeInput, DEFAULT_THEME_ID};

pub(crate) const POPOVER_WIDTH: f32 = 360.0;
pub(crate) const PRESET_COLUMNS: usize = 5;
pub(crate) const POPOVER_TOP_OFFSET: f32 = 60.0;
pub(crate) const POPOVER_RIGHT_OFFSET: f32 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PickerTab {
    #[default]
    Presets,
    Custom,
}

impl PickerTab {
    pub(crate) const ALL: [PickerTab; 2] =
        [PickerTab::Presets, PickerTab::Custom];

    pub(crate) fn label(self) -> &'static str {
        match self {
            PickerTab::Presets => "Presets",
            PickerTab::Custom => "Custom",
        }
    }
}

/// Read-only theme picker data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemePickerViewModel<'a> {
    pub(crate) tab: PickerTab,
    pub(crate) input: &'a CustomThemeInput,
}

/// Popover caption naming the active theme.
pub(crate) fn header_caption(theme: &Theme) -> String {
    if theme.id == DEFAULT_THEME_ID {
        format!("{} · Default", theme.name)
    } else {
        theme.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use splus_nav::theme::{default_theme, find_theme};

    use super::header_caption;

    #[test]
    fn given_default_theme_when_captioning_then_default_marker_is_appended() {
        assert_eq!(header_caption(default_theme()), "Navy Blue · Default");
    }

    #[test]
    fn given_other_preset_when_captioning_then_only_name_is_shown() {
        let forest = find_theme("forest").expect("forest preset exists");
        assert_eq!(header_caption(forest), forest.name);
    }
}
