use iced::widget::{
    MouseArea, Space, Stack, button, column, container, row, text, text_input,
};
use iced::{Border, Color, Element, Length, alignment};

use super::super::event::TopbarEvent;
use super::super::model::{
    BRAND_LABEL, SEARCH_PLACEHOLDER, TOPBAR_HEIGHT, TopbarViewModel, USER_NAME,
    USER_ROLE, initials,
};
use crate::shared::ui::style::{
    CONTROL_RADIUS, ghost_button_style, primary_button_style, text_input_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const HORIZONTAL_PADDING: f32 = 16.0;
const CLUSTER_SPACING: f32 = 8.0;
const BRAND_MARK_SIZE: f32 = 30.0;
const BRAND_FONT_SIZE: f32 = 16.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const CAPTION_FONT_SIZE: f32 = 11.0;
const SWATCH_SIZE: f32 = 16.0;
const AVATAR_SIZE: f32 = 30.0;
const BADGE_SIZE: f32 = 16.0;
const WINDOW_CONTROL_WIDTH: f32 = 32.0;
const SEARCH_WIDTH: f32 = 360.0;
const SEARCH_GAP: f32 = 24.0;

/// Props for rendering the application header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderBarProps<'a> {
    pub(crate) vm: TopbarViewModel<'a>,
    pub(crate) assistant_open: bool,
    pub(crate) picker_open: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the header with brand, toggles, profile and window controls.
pub(crate) fn view<'a>(props: HeaderBarProps<'a>) -> Element<'a, TopbarEvent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.surface;
    let border = palette.border;

    let brand = MouseArea::new(
        row![
            brand_mark(palette),
            text(BRAND_LABEL).size(BRAND_FONT_SIZE).style(move |_| {
                text::Style {
                    color: Some(palette.foreground),
                }
            }),
        ]
        .spacing(CLUSTER_SPACING)
        .align_y(alignment::Vertical::Center),
    )
    .on_press(TopbarEvent::BrandPressed)
    .interaction(iced::mouse::Interaction::Pointer);

    let search = text_input(SEARCH_PLACEHOLDER, props.vm.search)
        .on_input(TopbarEvent::SearchChanged)
        .width(Length::Fixed(SEARCH_WIDTH))
        .padding([6, 12])
        .size(LABEL_FONT_SIZE)
        .style(text_input_style(props.theme));

    let ask_ai = button(text("✦ Ask AI").size(LABEL_FONT_SIZE))
        .padding([6, 12])
        .style(move |_, status| {
            if props.assistant_open {
                primary_button_style(palette, status, true)
            } else {
                ghost_button_style(palette, status, false)
            }
        })
        .on_press(TopbarEvent::ToggleAssistant);

    let primary = palette.primary;
    let swatch = container(Space::new())
        .width(Length::Fixed(SWATCH_SIZE))
        .height(Length::Fixed(SWATCH_SIZE))
        .style(move |_| container::Style {
            background: Some(primary.into()),
            border: Border {
                width: 2.0,
                color: Color::WHITE,
                radius: (SWATCH_SIZE / 2.0).into(),
            },
            ..Default::default()
        });
    let theme_trigger = button(
        row![swatch, text("Theme").size(LABEL_FONT_SIZE)]
            .spacing(6)
            .align_y(alignment::Vertical::Center),
    )
    .padding([6, 10])
    .style(move |_, status| {
        ghost_button_style(palette, status, props.picker_open)
    })
    .on_press(TopbarEvent::ToggleThemePicker);

    let actions = row![
        ask_ai,
        theme_trigger,
        notifications(palette, props.vm.unread_notifications),
        profile(palette),
        button(text("⎋ Logout").size(LABEL_FONT_SIZE))
            .padding([6, 10])
            .style(move |_, status| ghost_button_style(palette, status, false))
            .on_press(TopbarEvent::Logout),
        window_controls(palette, props.vm.is_fullscreen),
    ]
    .spacing(CLUSTER_SPACING)
    .align_y(alignment::Vertical::Center);

    let base_row = row![
        brand,
        Space::new().width(Length::Fixed(SEARCH_GAP)),
        search,
        Space::new().width(Length::Fill),
        actions,
    ]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([0.0, HORIZONTAL_PADDING]);

    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(TopbarEvent::StartWindowDrag)
    .on_double_click(TopbarEvent::ToggleFullScreen);

    let content = Stack::new().push(drag_surface).push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(TOPBAR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(background.into()),
            border: Border {
                width: 1.0,
                color: border,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn brand_mark<'a>(palette: &'a IcedColorPalette) -> Element<'a, TopbarEvent> {
    let primary = palette.primary;
    container(text("S").size(BRAND_FONT_SIZE))
        .width(Length::Fixed(BRAND_MARK_SIZE))
        .height(Length::Fixed(BRAND_MARK_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(primary.into()),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: CONTROL_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn notifications<'a>(
    palette: &'a IcedColorPalette,
    unread: u32,
) -> Element<'a, TopbarEvent> {
    let bell = container(text("🔔").size(LABEL_FONT_SIZE + 2.0))
        .padding([6, 8])
        .style(move |_| container::Style {
            text_color: Some(palette.foreground),
            ..Default::default()
        });

    if unread == 0 {
        return bell.into();
    }

    let danger = palette.danger;
    let count = text(unread.to_string()).size(CAPTION_FONT_SIZE - 1.0);
    let badge = container(count)
        .width(Length::Fixed(BADGE_SIZE))
        .height(Length::Fixed(BADGE_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(danger.into()),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: (BADGE_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let badge_layer = container(badge)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right);

    Stack::new().push(bell).push(badge_layer).into()
}

fn profile<'a>(palette: &'a IcedColorPalette) -> Element<'a, TopbarEvent> {
    let secondary = palette.secondary;
    let avatar = container(text(initials(USER_NAME)).size(CAPTION_FONT_SIZE))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(secondary.into()),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: (AVATAR_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let muted = palette.muted_foreground;
    let foreground = palette.foreground;
    let labels = column![
        text(USER_NAME).size(LABEL_FONT_SIZE).style(move |_| text::Style {
            color: Some(foreground),
        }),
        text(USER_ROLE)
            .size(CAPTION_FONT_SIZE)
            .style(move |_| text::Style { color: Some(muted) }),
    ];

    row![avatar, labels]
        .spacing(CLUSTER_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn window_controls<'a>(
    palette: &'a IcedColorPalette,
    is_fullscreen: bool,
) -> Element<'a, TopbarEvent> {
    let fullscreen_glyph = if is_fullscreen { "❐" } else { "□" };
    let controls = [
        ("—", TopbarEvent::MinimizeWindow),
        (fullscreen_glyph, TopbarEvent::ToggleFullScreen),
        ("✕", TopbarEvent::CloseWindow),
    ];

    row(controls.into_iter().map(|(glyph, event)| {
        button(
            container(text(glyph).size(LABEL_FONT_SIZE))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fixed(WINDOW_CONTROL_WIDTH))
        .padding([6, 0])
        .style(move |_, status| ghost_button_style(palette, status, false))
        .on_press(event)
        .into()
    }))
    .spacing(2)
    .into()
}
