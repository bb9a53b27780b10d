use iced::Task;
use splus_nav::Theme;
use splus_nav::theme::build_custom_theme;

use super::event::{ThemePickerEffect, ThemePickerEvent};
use super::state::{ColorField, ThemePickerState};

/// Read-only values the theme picker reducer needs from the app.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemePickerCtx<'a> {
    pub(crate) active_theme: &'a Theme,
}

/// Reduce a theme picker event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut ThemePickerState,
    event: ThemePickerEvent,
    ctx: &ThemePickerCtx<'_>,
) -> Task<ThemePickerEffect> {
    match event {
        ThemePickerEvent::Toggle => {
            if state.is_open() {
                state.close();
            } else {
                state.open(ctx.active_theme);
            }
            Task::none()
        },
        ThemePickerEvent::Close => {
            state.close();
            Task::none()
        },
        ThemePickerEvent::TabSelected(tab) => {
            state.select_tab(tab);
            Task::none()
        },
        ThemePickerEvent::PresetSelected(id) => {
            state.close();
            Task::done(ThemePickerEffect::ApplyPreset(id))
        },
        ThemePickerEvent::PrimaryChanged(value) => {
            edit(state, ColorField::Primary, value)
        },
        ThemePickerEvent::SidebarChanged(value) => {
            edit(state, ColorField::Sidebar, value)
        },
        ThemePickerEvent::CanvasChanged(value) => {
            edit(state, ColorField::Canvas, value)
        },
        ThemePickerEvent::ApplyCustom => {
            if !state.input().is_valid() {
                return Task::none();
            }
            match build_custom_theme(state.input()) {
                Ok(theme) => {
                    state.close();
                    Task::done(ThemePickerEffect::ApplyCustom(theme))
                },
                Err(err) => {
                    log::warn!("custom theme rejected: {err}");
                    Task::none()
                },
            }
        },
        ThemePickerEvent::Reset => Task::done(ThemePickerEffect::ResetTheme),
    }
}

fn edit(
    state: &mut ThemePickerState,
    field: ColorField,
    value: String,
) -> Task<ThemePickerEffect> {
    if !state.edit(field, value) {
        log::debug!("ignoring non-hex input for {field:?}");
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use splus_nav::theme::{
        CustomThemeInput, build_custom_theme, default_theme,
    };

    use super::*;
    use crate::widgets::theme_picker::model::PickerTab;

    fn ctx(theme: &Theme) -> ThemePickerCtx<'_> {
        ThemePickerCtx {
            active_theme: theme,
        }
    }

    #[test]
    fn given_closed_picker_when_toggled_twice_then_it_opens_and_closes() {
        let mut state = ThemePickerState::default();
        let active = default_theme();

        let _ = reduce(&mut state, ThemePickerEvent::Toggle, &ctx(active));
        assert!(state.is_open());

        let _ = reduce(&mut state, ThemePickerEvent::Toggle, &ctx(active));
        assert!(!state.is_open());
    }

    #[test]
    fn given_custom_active_theme_when_opening_then_inputs_are_seeded_from_it()
    {
        let mut state = ThemePickerState::default();
        let custom = build_custom_theme(&CustomThemeInput {
            primary: String::from("#ff0000"),
            sidebar: String::from("#111111"),
            canvas: String::from("#fafafa"),
        })
        .expect("valid input");

        let _ = reduce(&mut state, ThemePickerEvent::Toggle, &ctx(&custom));

        assert_eq!(state.input().primary, "#ff0000");
        assert_eq!(state.input().sidebar, "#111111");
        assert_eq!(state.input().canvas, "#fafafa");
    }

    #[test]
    fn given_preset_active_theme_when_opening_then_default_inputs_are_used() {
        let mut state = ThemePickerState::default();
        let _ = state.edit(ColorField::Primary, String::from("#123"));

        let _ = reduce(
            &mut state,
            ThemePickerEvent::Toggle,
            &ctx(default_theme()),
        );

        assert_eq!(state.input(), &CustomThemeInput::default());
    }

    #[test]
    fn given_non_hex_input_when_editing_then_previous_value_is_kept() {
        let mut state = ThemePickerState::default();
        let active = default_theme();

        let _ = reduce(
            &mut state,
            ThemePickerEvent::PrimaryChanged(String::from("#12zz")),
            &ctx(active),
        );
        assert_eq!(state.input().primary, "#2563eb");

        let _ = reduce(
            &mut state,
            ThemePickerEvent::CanvasChanged(String::from("#ab")),
            &ctx(active),
        );
        assert_eq!(state.input().canvas, "#ab");
        assert!(!state.input().is_valid());
    }

    #[test]
    fn given_open_picker_when_preset_selected_then_it_closes() {
        let mut state = ThemePickerState::default();
        let active = default_theme();
        let _ = reduce(&mut state, ThemePickerEvent::Toggle, &ctx(active));
        let _ = reduce(
            &mut state,
            ThemePickerEvent::TabSelected(PickerTab::Custom),
            &ctx(active),
        );
        assert_eq!(state.tab(), PickerTab::Custom);

        let _ = reduce(
            &mut state,
            ThemePickerEvent::PresetSelected(String::from("teal")),
            &ctx(active),
        );

        assert!(!state.is_open());
    }

    #[test]
    fn given_open_picker_when_valid_custom_applied_then_it_closes() {
        let mut state = ThemePickerState::default();
        let active = default_theme();
        let _ = reduce(&mut state, ThemePickerEvent::Toggle, &ctx(active));
        assert!(state.is_open());

        let _ = reduce(
            &mut state,
            ThemePickerEvent::ApplyCustom,
            &ctx(active),
        );

        assert!(!state.is_open());
    }

    #[test]
    fn given_invalid_custom_input_when_applying_then_picker_stays_open() {
        let mut state = ThemePickerState::default();
        let active = default_theme();
        let _ = reduce(&mut state, ThemePickerEvent::Toggle, &ctx(active));
        let _ = state.edit(ColorField::Primary, String::from("#12"));

        let _ = reduce(
            &mut state,
            ThemePickerEvent::ApplyCustom,
            &ctx(active),
        );

        assert!(state.is_open());
    }

    #[test]
    fn given_edited_inputs_when_reset_then_drafts_and_popover_are_kept() {
        let mut state = ThemePickerState::default();
        let active = default_theme();
        let _ = reduce(&mut state, ThemePickerEvent::Toggle, &ctx(active));
        let _ = state.edit(ColorField::Sidebar, String::from("#000000"));

        let _ = reduce(&mut state, ThemePickerEvent::Reset, &ctx(active));

        assert_eq!(state.input().sidebar, "#000000");
        assert!(state.is_open());
    }
}
