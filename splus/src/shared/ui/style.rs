use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::theme::{IcedColorPalette, ThemeProps};

pub(crate) const CARD_RADIUS: f32 = 10.0;
pub(crate) const CONTROL_RADIUS: f32 = 6.0;

/// Return `color` with its alpha replaced.
pub(crate) fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color.a = alpha;
    color
}

/// Return a container style closure for a solid panel with a bottom or side
/// border drawn in `border`.
pub(crate) fn panel_style(
    background: Color,
    border: Color,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(background.into()),
        border: Border {
            width: 1.0,
            color: border,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Return a container style closure for white content cards.
pub(crate) fn card_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    let radius = theme
        .overrides
        .and_then(|overrides| overrides.border_radius)
        .unwrap_or(CARD_RADIUS);
    move |_| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Return a container style closure for floating overlays.
pub(crate) fn popover_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.18),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Return a button style for rows on the sidebar background.
pub(crate) fn sidebar_row_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    is_active: bool,
) -> button::Style {
    let background = if is_active {
        Some(palette.sidebar_active.into())
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                Some(palette.sidebar_hover.into())
            },
            _ => None,
        }
    };

    let text_color = if is_active {
        palette.sidebar_text
    } else {
        palette.sidebar_text_muted
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: CONTROL_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Return a button style for flat buttons on light surfaces.
pub(crate) fn ghost_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    is_active: bool,
) -> button::Style {
    let background = if is_active {
        Some(with_alpha(palette.primary, 0.12).into())
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                Some(with_alpha(palette.foreground, 0.06).into())
            },
            _ => None,
        }
    };

    let text_color = if is_active {
        palette.primary
    } else {
        palette.foreground
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: CONTROL_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Return a button style for filled brand-colored actions.
pub(crate) fn primary_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    enabled: bool,
) -> button::Style {
    let base_color = if !enabled {
        with_alpha(palette.primary, 0.4)
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => palette.secondary,
            _ => palette.primary,
        }
    };

    button::Style {
        background: Some(base_color.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: CONTROL_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Return a text input style closure with brand-colored focus.
pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.background = Background::Color(palette.surface);
        style.border = Border {
            width: 1.0,
            color: match status {
                text_input::Status::Focused { .. } => palette.primary,
                _ => palette.border,
            },
            radius: CONTROL_RADIUS.into(),
        };
        style.selection = with_alpha(palette.primary, 0.3);
        style
    }
}

/// Return a scrollbar style closure with thin rails and reduced alpha.
pub(crate) fn thin_scroll_style(
    scroller: Color,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;
        style.vertical_rail.background = None;
        style.vertical_rail.scroller.background =
            Background::Color(with_alpha(scroller, 0.5));

        style
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use splus_nav::theme::default_theme;

    use super::{ghost_button_style, primary_button_style, sidebar_row_style};
    use crate::shared::ui::theme::AppTheme;

    #[test]
    fn given_active_sidebar_row_when_styling_then_active_background_is_used() {
        let theme = AppTheme::new(default_theme().clone());
        let palette = theme.iced_palette();

        let style = sidebar_row_style(palette, Status::Active, true);

        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette.sidebar_active))
        );
        assert_eq!(style.text_color, palette.sidebar_text);
    }

    #[test]
    fn given_idle_sidebar_row_when_styling_then_background_is_transparent() {
        let theme = AppTheme::new(default_theme().clone());
        let palette = theme.iced_palette();

        let style = sidebar_row_style(palette, Status::Active, false);

        assert_eq!(style.background, None);
        assert_eq!(style.text_color, palette.sidebar_text_muted);
    }

    #[test]
    fn given_disabled_primary_button_when_styling_then_brand_is_faded() {
        let theme = AppTheme::new(default_theme().clone());
        let palette = theme.iced_palette();

        let style = primary_button_style(palette, Status::Hovered, false);
        let Some(iced::Background::Color(color)) = style.background else {
            panic!("primary button should have a color background");
        };

        assert!((color.a - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn given_active_ghost_button_when_styling_then_text_uses_brand_color() {
        let theme = AppTheme::new(default_theme().clone());
        let palette = theme.iced_palette();

        let style = ghost_button_style(palette, Status::Active, true);

        assert_eq!(style.text_color, palette.primary);
    }
}
