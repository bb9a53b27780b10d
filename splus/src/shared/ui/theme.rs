use iced::theme::Palette;
use iced::{Color, Theme};
use splus_nav::theme::{Rgba, StyleVar, StyleVars, apply_theme, parse_css_color};

const FOREGROUND: Color = Color::from_rgb(0.059, 0.090, 0.165);
const MUTED_FOREGROUND: Color = Color::from_rgb(0.392, 0.455, 0.545);
const SURFACE: Color = Color::WHITE;
const SUCCESS: Color = Color::from_rgb(0.133, 0.773, 0.369);
const DANGER: Color = Color::from_rgb(0.937, 0.267, 0.267);
const WARNING: Color = Color::from_rgb(0.961, 0.620, 0.043);

/// Style variables resolved into iced colors, plus fixed content colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) primary: Color,
    pub(crate) secondary: Color,
    pub(crate) sidebar: Color,
    pub(crate) canvas: Color,
    pub(crate) border: Color,
    pub(crate) sidebar_text: Color,
    pub(crate) sidebar_text_muted: Color,
    pub(crate) sidebar_border: Color,
    pub(crate) sidebar_hover: Color,
    pub(crate) sidebar_active: Color,
    pub(crate) dock_bg: Color,
    pub(crate) dock_icon: Color,
    pub(crate) surface: Color,
    pub(crate) foreground: Color,
    pub(crate) muted_foreground: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) warning: Color,
}

impl From<&StyleVars> for IcedColorPalette {
    fn from(vars: &StyleVars) -> Self {
        Self {
            primary: var_color(vars, StyleVar::PrimaryBrand, FOREGROUND),
            secondary: var_color(vars, StyleVar::SecondaryBrand, FOREGROUND),
            sidebar: var_color(vars, StyleVar::SidebarBg, FOREGROUND),
            canvas: var_color(vars, StyleVar::AppCanvas, SURFACE),
            border: var_color(vars, StyleVar::BorderSubtle, MUTED_FOREGROUND),
            sidebar_text: var_color(vars, StyleVar::SidebarText, SURFACE),
            sidebar_text_muted: var_color(
                vars,
                StyleVar::SidebarTextMuted,
                MUTED_FOREGROUND,
            ),
            sidebar_border: var_color(
                vars,
                StyleVar::SidebarBorder,
                Color::TRANSPARENT,
            ),
            sidebar_hover: var_color(
                vars,
                StyleVar::SidebarHover,
                Color::TRANSPARENT,
            ),
            sidebar_active: var_color(
                vars,
                StyleVar::SidebarActive,
                Color::TRANSPARENT,
            ),
            dock_bg: var_color(vars, StyleVar::DockBg, FOREGROUND),
            dock_icon: var_color(vars, StyleVar::DockIconColor, SURFACE),
            surface: SURFACE,
            foreground: FOREGROUND,
            muted_foreground: MUTED_FOREGROUND,
            success: SUCCESS,
            danger: DANGER,
            warning: WARNING,
        }
    }
}

fn var_color(vars: &StyleVars, var: StyleVar, fallback: Color) -> Color {
    match vars.color(var) {
        Ok(color) => rgba_to_color(color),
        Err(err) => {
            log::warn!("style variable {} is unusable: {err}", var.name());
            fallback
        },
    }
}

fn rgba_to_color(value: Rgba) -> Color {
    Color::from_rgba8(value.r, value.g, value.b, value.a)
}

/// Parse a CSS color literal into an iced color.
pub(crate) fn css_color(value: &str) -> Option<Color> {
    parse_css_color(value).ok().map(rgba_to_color)
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) border_radius: Option<f32>,
}

/// Active theme together with its resolved iced colors.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    source: splus_nav::Theme,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn new(source: splus_nav::Theme) -> Self {
        let vars = apply_theme(&source);
        let iced_palette = IcedColorPalette::from(&vars);
        Self {
            source,
            iced_palette,
        }
    }

    pub(crate) fn id(&self) -> &str {
        &self.source.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.source.name
    }

    pub(crate) fn source(&self) -> &splus_nav::Theme {
        &self.source
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.canvas,
            text: palette.foreground,
            primary: palette.primary,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.name().to_string(), palette)
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    pub(crate) fn with_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Holds the theme every surface renders with.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(theme: splus_nav::Theme) -> Self {
        Self {
            current: AppTheme::new(theme),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Replace the active theme and re-derive its style variables.
    pub(crate) fn apply(&mut self, theme: splus_nav::Theme) {
        log::info!("applying theme `{}`", theme.id);
        self.current = AppTheme::new(theme);
    }
}

#[cfg(test)]
mod tests {
    use splus_nav::theme::{
        CustomThemeInput, build_custom_theme, default_theme, find_theme,
    };

    use super::{AppTheme, ThemeManager};

    #[test]
    fn given_dark_preset_when_converting_then_dock_icon_is_white() {
        let theme = AppTheme::new(default_theme().clone());
        let palette = theme.iced_palette();

        assert_eq!(palette.dock_icon, iced::Color::WHITE);
        assert_eq!(palette.primary, iced::Color::from_rgb8(0x25, 0x63, 0xeb));
        assert!(palette.sidebar_text.a < 1.0);
    }

    #[test]
    fn given_light_preset_when_converting_then_sidebar_text_is_opaque_slate()
    {
        let theme = AppTheme::new(
            find_theme("linen").expect("linen preset exists").clone(),
        );
        let palette = theme.iced_palette();

        assert_eq!(
            palette.sidebar_text,
            iced::Color::from_rgb8(0x1e, 0x29, 0x3b)
        );
        assert_eq!(palette.dock_icon, iced::Color::from_rgb8(0x11, 0x18, 0x27));
    }

    #[test]
    fn given_theme_with_broken_color_when_converting_then_fallback_is_used() {
        let mut broken = default_theme().clone();
        broken.canvas = String::from("not-a-color");
        let theme = AppTheme::new(broken);

        assert_eq!(theme.iced_palette().canvas, iced::Color::WHITE);
    }

    #[test]
    fn given_manager_when_applying_custom_theme_then_current_changes() {
        let mut manager = ThemeManager::new(default_theme().clone());
        let custom = build_custom_theme(&CustomThemeInput::default())
            .expect("default input is valid");

        manager.apply(custom);

        assert_eq!(manager.current().id(), "custom");
        assert_eq!(manager.current().name(), "Custom");
    }
}
