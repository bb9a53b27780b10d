use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::errors::ThemeError;

pub const DEFAULT_THEME_ID: &str = "navy";
pub const CUSTOM_THEME_ID: &str = "custom";
pub const CUSTOM_THEME_NAME: &str = "Custom";

/// Sidebar text used on light sidebars.
pub const LIGHT_SIDEBAR_TEXT: &str = "#1e293b";
/// Number of dark presets at the head of [`list_themes`].
pub const DARK_PRESET_COUNT: usize = 10;

const SECONDARY_OFFSET: i16 = 40;
const LIGHT_BORDER_OFFSET: i16 = -12;
const DARK_BORDER_OFFSET: i16 = 20;
const LIGHTNESS_THRESHOLD: u32 = 128;

/// Named interface palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub sidebar: String,
    pub primary: String,
    pub secondary: String,
    pub canvas: String,
    pub border: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_text: Option<String>,
}

impl Theme {
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_THEME_ID
    }
}

struct Preset {
    id: &'static str,
    name: &'static str,
    sidebar: &'static str,
    primary: &'static str,
    secondary: &'static str,
    canvas: &'static str,
    border: &'static str,
    sidebar_text: Option<&'static str>,
}

const fn dark(
    id: &'static str,
    name: &'static str,
    [sidebar, primary, secondary, canvas, border]: [&'static str; 5],
) -> Preset {
    Preset {
        id,
        name,
        sidebar,
        primary,
        secondary,
        canvas,
        border,
        sidebar_text: None,
    }
}

const fn light(
    id: &'static str,
    name: &'static str,
    colors: [&'static str; 5],
) -> Preset {
    let mut preset = dark(id, name, colors);
    preset.sidebar_text = Some(LIGHT_SIDEBAR_TEXT);
    preset
}

// sidebar, primary, secondary, canvas, border
const PRESETS: &[Preset] = &[
    dark(
        "navy",
        "Navy Blue",
        ["#0d1b2e", "#2563eb", "#60a5fa", "#f0f4f8", "#e1e7ef"],
    ),
    dark(
        "forest",
        "Forest",
        ["#0f2318", "#16a34a", "#4ade80", "#f0fdf4", "#d1fae5"],
    ),
    dark(
        "violet",
        "Violet",
        ["#1e1b4b", "#7c3aed", "#a78bfa", "#faf5ff", "#ede9fe"],
    ),
    dark(
        "carbon",
        "Carbon",
        ["#1c2127", "#6366f1", "#818cf8", "#f8fafc", "#e2e8f0"],
    ),
    dark(
        "ocean",
        "Ocean",
        ["#072035", "#0ea5e9", "#38bdf8", "#f0f9ff", "#e0f2fe"],
    ),
    dark(
        "crimson",
        "Crimson",
        ["#1c0808", "#dc2626", "#f87171", "#fff5f5", "#fee2e2"],
    ),
    dark(
        "amber",
        "Amber",
        ["#1c1207", "#d97706", "#fbbf24", "#fffbeb", "#fef3c7"],
    ),
    dark(
        "teal",
        "Teal",
        ["#042f2e", "#0d9488", "#2dd4bf", "#f0fdfa", "#ccfbf1"],
    ),
    dark(
        "rose",
        "Rose",
        ["#1a0c0f", "#e11d48", "#fb7185", "#fff1f2", "#ffe4e6"],
    ),
    dark(
        "midnight",
        "Midnight",
        ["#0f172a", "#8b5cf6", "#c4b5fd", "#f8fafc", "#e2e8f0"],
    ),
    light(
        "linen",
        "Linen",
        ["#ede8e0", "#b45309", "#f59e0b", "#faf7f4", "#e5ddd5"],
    ),
    light(
        "glacier",
        "Glacier",
        ["#dde8f0", "#0369a1", "#38bdf8", "#f0f6fa", "#bcd9ea"],
    ),
    light(
        "mint",
        "Mint",
        ["#ddf0e6", "#15803d", "#4ade80", "#f0faf3", "#bbdec9"],
    ),
    light(
        "blush",
        "Blush",
        ["#f0dde7", "#be185d", "#f472b6", "#fdf4f7", "#e8bbcf"],
    ),
    light(
        "pearl",
        "Pearl",
        ["#eaeaf2", "#4f46e5", "#818cf8", "#f8f8ff", "#d5d5ec"],
    ),
];

static THEMES: LazyLock<Vec<Theme>> = LazyLock::new(|| {
    PRESETS
        .iter()
        .map(|preset| Theme {
            id: preset.id.to_string(),
            name: preset.name.to_string(),
            sidebar: preset.sidebar.to_string(),
            primary: preset.primary.to_string(),
            secondary: preset.secondary.to_string(),
            canvas: preset.canvas.to_string(),
            border: preset.border.to_string(),
            sidebar_text: preset.sidebar_text.map(str::to_string),
        })
        .collect()
});

/// Preset palettes: ten dark ones followed by five light ones.
pub fn list_themes() -> &'static [Theme] {
    &THEMES
}

/// Find a preset by id.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    list_themes().iter().find(|theme| theme.id == id)
}

/// First preset, used whenever nothing better is known.
pub fn default_theme() -> &'static Theme {
    &list_themes()[0]
}

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb`; the leading `#` is optional.
    pub fn from_hex(value: &str) -> Result<Self, ThemeError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ThemeError::InvalidColor(value.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ThemeError::InvalidColor(value.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness (ITU-R BT.601) scaled by 1000.
    fn weighted_brightness(self) -> u32 {
        u32::from(self.r) * 299
            + u32::from(self.g) * 587
            + u32::from(self.b) * 114
    }

    /// Light when perceived brightness exceeds 128.
    pub fn is_light(self) -> bool {
        self.weighted_brightness() > LIGHTNESS_THRESHOLD * 1000
    }

    /// Add `amount` to every channel, clamping to `0..=255`.
    pub fn adjust(self, amount: i16) -> Self {
        let shift =
            |channel: u8| (i16::from(channel) + amount).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }
}

/// RGB color with an alpha channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl From<Rgb> for Rgba {
    fn from(value: Rgb) -> Self {
        Self {
            r: value.r,
            g: value.g,
            b: value.b,
            a: 1.0,
        }
    }
}

/// Parse a style value written as `#rrggbb` or `rgba(r,g,b,a)`.
pub fn parse_css_color(value: &str) -> Result<Rgba, ThemeError> {
    let trimmed = value.trim();
    if trimmed.starts_with('#') {
        return Rgb::from_hex(trimmed).map(Rgba::from);
    }

    let invalid = || ThemeError::InvalidColor(value.to_string());
    let inner = trimmed
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let [r, g, b, a] = parts.as_slice() else {
        return Err(invalid());
    };

    let a: f32 = a.parse().map_err(|_| invalid())?;
    if !(0.0..=1.0).contains(&a) {
        return Err(invalid());
    }

    Ok(Rgba {
        r: r.parse().map_err(|_| invalid())?,
        g: g.parse().map_err(|_| invalid())?,
        b: b.parse().map_err(|_| invalid())?,
        a,
    })
}

/// Return whether `hex` reads as a light color. Unparsable input is dark.
pub fn is_light_color(hex: &str) -> bool {
    Rgb::from_hex(hex).map(Rgb::is_light).unwrap_or(false)
}

/// Shift every channel of `hex` by `amount`.
pub fn adjust_brightness(hex: &str, amount: i16) -> Result<String, ThemeError> {
    Rgb::from_hex(hex).map(|rgb| rgb.adjust(amount).to_hex())
}

/// Strict `#rrggbb` check used for user input.
pub fn is_valid_hex_color(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('#') || value.len() != 7 {
        return false;
    }
    chars.all(|ch| ch.is_ascii_hexdigit())
}

/// Accept partially typed hex input such as `#` or `#12ab`.
pub fn is_hex_color_prefix(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('#') || value.len() > 7 {
        return false;
    }
    chars.all(|ch| ch.is_ascii_hexdigit())
}

/// Global style variables exposed to every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleVar {
    PrimaryBrand,
    SecondaryBrand,
    SidebarBg,
    AppCanvas,
    BorderSubtle,
    SidebarText,
    SidebarTextMuted,
    SidebarBorder,
    SidebarHover,
    SidebarActive,
    DockBg,
    DockIconColor,
}

impl StyleVar {
    pub const ALL: [StyleVar; 12] = [
        StyleVar::PrimaryBrand,
        StyleVar::SecondaryBrand,
        StyleVar::SidebarBg,
        StyleVar::AppCanvas,
        StyleVar::BorderSubtle,
        StyleVar::SidebarText,
        StyleVar::SidebarTextMuted,
        StyleVar::SidebarBorder,
        StyleVar::SidebarHover,
        StyleVar::SidebarActive,
        StyleVar::DockBg,
        StyleVar::DockIconColor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleVar::PrimaryBrand => "--primary-brand",
            StyleVar::SecondaryBrand => "--secondary-brand",
            StyleVar::SidebarBg => "--sidebar-bg",
            StyleVar::AppCanvas => "--app-canvas",
            StyleVar::BorderSubtle => "--border-subtle",
            StyleVar::SidebarText => "--sidebar-text",
            StyleVar::SidebarTextMuted => "--sidebar-text-muted",
            StyleVar::SidebarBorder => "--sidebar-border",
            StyleVar::SidebarHover => "--sidebar-hover",
            StyleVar::SidebarActive => "--sidebar-active",
            StyleVar::DockBg => "--dock-bg",
            StyleVar::DockIconColor => "--dock-icon-color",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Values of all twelve style variables for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVars {
    values: [String; 12],
}

impl StyleVars {
    pub fn get(&self, var: StyleVar) -> &str {
        &self.values[var.index()]
    }

    /// Look a variable up by its `--name`.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        StyleVar::from_name(name).map(|var| self.get(var))
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleVar, &str)> {
        StyleVar::ALL.into_iter().map(|var| (var, self.get(var)))
    }

    /// Parse a variable into a color.
    pub fn color(&self, var: StyleVar) -> Result<Rgba, ThemeError> {
        parse_css_color(self.get(var))
    }
}

struct DerivedPalette {
    text: &'static str,
    muted: &'static str,
    border: &'static str,
    hover: &'static str,
    active: &'static str,
    dock_bg: &'static str,
    dock_icon: &'static str,
}

const LIGHT_DERIVED: DerivedPalette = DerivedPalette {
    text: LIGHT_SIDEBAR_TEXT,
    muted: "rgba(30,41,59,0.52)",
    border: "rgba(0,0,0,0.08)",
    hover: "rgba(0,0,0,0.06)",
    active: "rgba(0,0,0,0.10)",
    dock_bg: "rgba(240,240,250,0.92)",
    dock_icon: "#111827",
};

const DARK_DERIVED: DerivedPalette = DerivedPalette {
    text: "rgba(255,255,255,0.92)",
    muted: "rgba(255,255,255,0.44)",
    border: "rgba(255,255,255,0.07)",
    hover: "rgba(255,255,255,0.08)",
    active: "rgba(255,255,255,0.11)",
    dock_bg: "rgba(10,20,36,0.85)",
    dock_icon: "#ffffff",
};

/// Derive the style variables for `theme`.
///
/// Five values come straight from the palette; the remaining seven depend
/// on whether the sidebar color reads as light.
pub fn apply_theme(theme: &Theme) -> StyleVars {
    let derived = if is_light_color(&theme.sidebar) {
        &LIGHT_DERIVED
    } else {
        &DARK_DERIVED
    };
    let sidebar_text = theme
        .sidebar_text
        .clone()
        .unwrap_or_else(|| derived.text.to_string());

    StyleVars {
        values: [
            theme.primary.clone(),
            theme.secondary.clone(),
            theme.sidebar.clone(),
            theme.canvas.clone(),
            theme.border.clone(),
            sidebar_text,
            derived.muted.to_string(),
            derived.border.to_string(),
            derived.hover.to_string(),
            derived.active.to_string(),
            derived.dock_bg.to_string(),
            derived.dock_icon.to_string(),
        ],
    }
}

/// Three user-picked colors a custom theme is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomThemeInput {
    pub primary: String,
    pub sidebar: String,
    pub canvas: String,
}

impl Default for CustomThemeInput {
    fn default() -> Self {
        Self {
            primary: String::from("#2563eb"),
            sidebar: String::from("#0d1b2e"),
            canvas: String::from("#f0f4f8"),
        }
    }
}

impl CustomThemeInput {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            primary: theme.primary.clone(),
            sidebar: theme.sidebar.clone(),
            canvas: theme.canvas.clone(),
        }
    }

    pub fn is_valid(&self) -> bool {
        [&self.primary, &self.sidebar, &self.canvas]
            .into_iter()
            .all(|value| is_valid_hex_color(value))
    }
}

/// Build the reserved custom theme from three picked colors.
pub fn build_custom_theme(
    input: &CustomThemeInput,
) -> Result<Theme, ThemeError> {
    let sidebar = Rgb::from_hex(&input.sidebar)?;
    let primary = Rgb::from_hex(&input.primary)?;
    let canvas = Rgb::from_hex(&input.canvas)?;
    let light = sidebar.is_light();

    let border = if light {
        canvas.adjust(LIGHT_BORDER_OFFSET)
    } else {
        sidebar.adjust(DARK_BORDER_OFFSET)
    };

    Ok(Theme {
        id: CUSTOM_THEME_ID.to_string(),
        name: CUSTOM_THEME_NAME.to_string(),
        sidebar: sidebar.to_hex(),
        primary: primary.to_hex(),
        secondary: primary.adjust(SECONDARY_OFFSET).to_hex(),
        canvas: canvas.to_hex(),
        border: border.to_hex(),
        sidebar_text: light.then(|| LIGHT_SIDEBAR_TEXT.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_presets_when_listed_then_dark_precede_light_in_declared_order() {
        let ids: Vec<&str> =
            list_themes().iter().map(|theme| theme.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "navy", "forest", "violet", "carbon", "ocean", "crimson",
                "amber", "teal", "rose", "midnight", "linen", "glacier",
                "mint", "blush", "pearl",
            ]
        );
        for (index, theme) in list_themes().iter().enumerate() {
            let is_light = is_light_color(&theme.sidebar);
            assert_eq!(is_light, index >= DARK_PRESET_COUNT, "{}", theme.id);
            assert_eq!(theme.sidebar_text.is_some(), is_light, "{}", theme.id);
        }
        assert_eq!(default_theme().id, DEFAULT_THEME_ID);
    }

    #[test]
    fn given_threshold_colors_when_testing_lightness_then_strictly_greater_is_light()
     {
        assert!(is_light_color("#ffffff"));
        assert!(!is_light_color("#000000"));
        assert!(!is_light_color("#808080"));
        assert!(is_light_color("#818181"));
        assert!(!is_light_color("not-a-color"));
    }

    #[test]
    fn given_dark_theme_when_applied_then_dark_derivations_are_used() {
        let vars = apply_theme(default_theme());
        assert_eq!(vars.get(StyleVar::PrimaryBrand), "#2563eb");
        assert_eq!(vars.get(StyleVar::SecondaryBrand), "#60a5fa");
        assert_eq!(vars.get(StyleVar::SidebarBg), "#0d1b2e");
        assert_eq!(vars.get(StyleVar::AppCanvas), "#f0f4f8");
        assert_eq!(vars.get(StyleVar::BorderSubtle), "#e1e7ef");
        assert_eq!(vars.get(StyleVar::SidebarText), "rgba(255,255,255,0.92)");
        assert_eq!(
            vars.get(StyleVar::SidebarTextMuted),
            "rgba(255,255,255,0.44)"
        );
        assert_eq!(vars.get(StyleVar::SidebarBorder), "rgba(255,255,255,0.07)");
        assert_eq!(vars.get(StyleVar::SidebarHover), "rgba(255,255,255,0.08)");
        assert_eq!(vars.get(StyleVar::SidebarActive), "rgba(255,255,255,0.11)");
        assert_eq!(vars.get(StyleVar::DockBg), "rgba(10,20,36,0.85)");
        assert_eq!(vars.get(StyleVar::DockIconColor), "#ffffff");
    }

    #[test]
    fn given_light_theme_when_applied_then_light_derivations_are_used() {
        let linen = find_theme("linen").expect("linen preset exists");
        let vars = apply_theme(linen);
        assert_eq!(vars.get_by_name("--sidebar-text"), Some("#1e293b"));
        assert_eq!(
            vars.get_by_name("--sidebar-text-muted"),
            Some("rgba(30,41,59,0.52)")
        );
        assert_eq!(
            vars.get_by_name("--sidebar-active"),
            Some("rgba(0,0,0,0.10)")
        );
        assert_eq!(
            vars.get_by_name("--dock-bg"),
            Some("rgba(240,240,250,0.92)")
        );
        assert_eq!(vars.get_by_name("--dock-icon-color"), Some("#111827"));
        assert_eq!(vars.get_by_name("--unknown"), None);
    }

    #[test]
    fn given_same_theme_when_applied_twice_then_variables_are_identical() {
        for theme in list_themes() {
            assert_eq!(apply_theme(theme), apply_theme(theme));
            assert_eq!(apply_theme(theme).iter().count(), 12);
        }
    }

    #[test]
    fn given_every_preset_when_applied_then_all_variables_parse_as_colors() {
        for theme in list_themes() {
            let vars = apply_theme(theme);
            for (var, value) in vars.iter() {
                assert!(vars.color(var).is_ok(), "{} = {value}", var.name());
            }
        }
    }

    #[test]
    fn given_light_sidebar_when_building_custom_theme_then_border_darkens_canvas()
    {
        let theme = build_custom_theme(&CustomThemeInput {
            primary: String::from("#2563eb"),
            sidebar: String::from("#ffffff"),
            canvas: String::from("#f0f4f8"),
        })
        .expect("valid input");

        assert_eq!(theme.border, "#e4e8ec");
        assert_eq!(theme.secondary, "#4d8bff");
        assert_eq!(theme.sidebar_text.as_deref(), Some(LIGHT_SIDEBAR_TEXT));
        assert_eq!(theme.id, CUSTOM_THEME_ID);
        assert_eq!(theme.name, CUSTOM_THEME_NAME);
    }

    #[test]
    fn given_dark_sidebar_when_building_custom_theme_then_border_brightens_sidebar()
     {
        let theme = build_custom_theme(&CustomThemeInput::default())
            .expect("valid input");

        assert_eq!(theme.border, "#212f42");
        assert_eq!(theme.sidebar_text, None);
    }

    #[test]
    fn given_channel_overflow_when_adjusting_then_channels_are_clamped() {
        assert_eq!(adjust_brightness("#f0f0f0", 40).as_deref(), Ok("#ffffff"));
        assert_eq!(adjust_brightness("#050505", -12).as_deref(), Ok("#000000"));
        assert!(adjust_brightness("#12345", 1).is_err());
    }

    #[test]
    fn given_invalid_custom_input_when_building_then_color_error_is_returned() {
        let input = CustomThemeInput {
            primary: String::from("#zzzzzz"),
            ..CustomThemeInput::default()
        };
        assert!(!input.is_valid());
        assert_eq!(
            build_custom_theme(&input),
            Err(ThemeError::InvalidColor(String::from("#zzzzzz")))
        );
    }

    #[test]
    fn given_css_values_when_parsing_then_hex_and_rgba_forms_are_supported() {
        assert_eq!(
            parse_css_color("#0d1b2e"),
            Ok(Rgba {
                r: 13,
                g: 27,
                b: 46,
                a: 1.0
            })
        );
        assert_eq!(
            parse_css_color("rgba(10,20,36,0.85)"),
            Ok(Rgba {
                r: 10,
                g: 20,
                b: 36,
                a: 0.85
            })
        );
        assert!(parse_css_color("rgba(1,2,3)").is_err());
        assert!(parse_css_color("hsl(0, 0%, 0%)").is_err());
    }

    #[test]
    fn given_custom_theme_when_serialized_then_wire_fields_are_camel_case() {
        let theme = build_custom_theme(&CustomThemeInput {
            sidebar: String::from("#ffffff"),
            ..CustomThemeInput::default()
        })
        .expect("valid input");
        let json = serde_json::to_value(&theme).expect("theme serializes");
        assert_eq!(json["sidebarText"], "#1e293b");
        assert_eq!(json["id"], "custom");

        let dark = build_custom_theme(&CustomThemeInput::default())
            .expect("valid input");
        let json = serde_json::to_value(&dark).expect("theme serializes");
        assert!(json.get("sidebarText").is_none());
    }

    #[test]
    fn given_typed_input_when_checking_hex_then_prefix_and_full_forms_differ() {
        assert!(is_valid_hex_color("#aBc123"));
        assert!(!is_valid_hex_color("#abc"));
        assert!(is_hex_color_prefix("#ab"));
        assert!(!is_hex_color_prefix("ab"));
        assert!(!is_hex_color_prefix("#abcdef0"));
    }
}
