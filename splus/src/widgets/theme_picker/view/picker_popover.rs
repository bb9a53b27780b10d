use iced::widget::{
    Column, Row, Space, button, column, container, row, text, text_input,
};
use iced::{Border, Color, Element, Length, alignment};
use splus_nav::Theme;
use splus_nav::theme::{DARK_PRESET_COUNT, list_themes};

use super::super::event::ThemePickerEvent;
use super::super::model::{
    POPOVER_WIDTH, PRESET_COLUMNS, PickerTab, ThemePickerViewModel,
    header_caption,
};
use crate::shared::ui::style::{
    CONTROL_RADIUS, ghost_button_style, popover_style, primary_button_style,
    text_input_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, css_color};

const TITLE_FONT_SIZE: f32 = 14.0;
const BODY_FONT_SIZE: f32 = 12.0;
const CAPTION_FONT_SIZE: f32 = 10.0;
const SWATCH_WIDTH: f32 = 56.0;
const SWATCH_HEIGHT: f32 = 30.0;
const DOT_SIZE: f32 = 10.0;
const FIELD_LABEL_WIDTH: f32 = 64.0;

/// Props for rendering the theme picker popover.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PickerPopoverProps<'a> {
    pub(crate) vm: ThemePickerViewModel<'a>,
    pub(crate) active: &'a Theme,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the popover with its preset grid or custom color form.
pub(crate) fn view<'a>(
    props: PickerPopoverProps<'a>,
) -> Element<'a, ThemePickerEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;

    let header = column![
        text("Theme").size(TITLE_FONT_SIZE),
        text(header_caption(props.active))
            .size(BODY_FONT_SIZE)
            .style(move |_| text::Style { color: Some(muted) }),
    ]
    .spacing(2);

    let tabs = Row::with_children(PickerTab::ALL.into_iter().map(|tab| {
        let is_active = tab == props.vm.tab;
        button(text(tab.label()).size(BODY_FONT_SIZE))
            .padding([4, 12])
            .style(move |_, status| {
                ghost_button_style(palette, status, is_active)
            })
            .on_press(ThemePickerEvent::TabSelected(tab))
            .into()
    }))
    .spacing(4);

    let body = match props.vm.tab {
        PickerTab::Presets => presets(palette, props.active),
        PickerTab::Custom => custom_form(props),
    };

    container(column![header, tabs, body].spacing(12))
        .width(Length::Fixed(POPOVER_WIDTH))
        .padding(14)
        .style(popover_style(props.theme))
        .into()
}

fn presets<'a>(
    palette: &'a IcedColorPalette,
    active: &'a Theme,
) -> Element<'a, ThemePickerEvent> {
    let (dark, light) = list_themes().split_at(DARK_PRESET_COUNT);
    let muted = palette.muted_foreground;

    let groups = [("Dark", dark), ("Light", light)].into_iter().map(
        |(caption, themes)| {
            let rows = themes.chunks(PRESET_COLUMNS).map(|chunk| {
                Row::with_children(
                    chunk
                        .iter()
                        .map(|preset| preset_tile(palette, preset, active)),
                )
                .spacing(6)
                .into()
            });

            column![
                text(caption)
                    .size(CAPTION_FONT_SIZE)
                    .style(move |_| text::Style { color: Some(muted) }),
                Column::with_children(rows).spacing(6),
            ]
            .spacing(6)
            .into()
        },
    );

    Column::with_children(groups).spacing(10).into()
}

fn preset_tile<'a>(
    palette: &'a IcedColorPalette,
    preset: &'static Theme,
    active: &'a Theme,
) -> Element<'a, ThemePickerEvent> {
    let is_active = preset.id == active.id;
    let sidebar = hex_color(&preset.sidebar);
    let primary = hex_color(&preset.primary);
    let outline = if is_active {
        palette.primary
    } else {
        palette.border
    };

    let dot = container(Space::new())
        .width(Length::Fixed(DOT_SIZE))
        .height(Length::Fixed(DOT_SIZE))
        .style(move |_| container::Style {
            background: Some(primary.into()),
            border: Border {
                radius: (DOT_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });
    let mark = if is_active { "✓" } else { "" };
    let swatch = container(
        row![dot, Space::new().width(Length::Fill), text(mark).size(11)]
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(SWATCH_WIDTH))
    .height(Length::Fixed(SWATCH_HEIGHT))
    .padding([0, 6])
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(sidebar.into()),
        text_color: Some(Color::WHITE),
        border: Border {
            width: if is_active { 2.0 } else { 1.0 },
            color: outline,
            radius: CONTROL_RADIUS.into(),
        },
        ..Default::default()
    });

    let label = text(preset.name.as_str()).size(CAPTION_FONT_SIZE);

    button(column![swatch, label].spacing(3).width(SWATCH_WIDTH))
        .padding(0)
        .style(|_, _| button::Style::default())
        .on_press(ThemePickerEvent::PresetSelected(preset.id.clone()))
        .into()
}

fn custom_form<'a>(
    props: PickerPopoverProps<'a>,
) -> Element<'a, ThemePickerEvent> {
    let palette = props.theme.theme.iced_palette();
    let input = props.vm.input;
    let fields: [(&str, &'a str, fn(String) -> ThemePickerEvent); 3] = [
        ("Primary", &input.primary, ThemePickerEvent::PrimaryChanged),
        ("Sidebar", &input.sidebar, ThemePickerEvent::SidebarChanged),
        ("Canvas", &input.canvas, ThemePickerEvent::CanvasChanged),
    ];

    let rows = fields.into_iter().map(|(label, value, on_input)| {
        let preview = hex_color(value);
        row![
            text(label)
                .size(BODY_FONT_SIZE)
                .width(Length::Fixed(FIELD_LABEL_WIDTH)),
            text_input("#rrggbb", value)
                .on_input(on_input)
                .padding([6, 8])
                .size(BODY_FONT_SIZE)
                .style(text_input_style(props.theme)),
            container(Space::new())
                .width(Length::Fixed(SWATCH_HEIGHT))
                .height(Length::Fixed(SWATCH_HEIGHT))
                .style(move |_| container::Style {
                    background: Some(preview.into()),
                    border: Border {
                        width: 1.0,
                        color: palette.border,
                        radius: CONTROL_RADIUS.into(),
                    },
                    ..Default::default()
                }),
        ]
        .spacing(8)
        .align_y(alignment::Vertical::Center)
        .into()
    });

    let can_apply = input.is_valid();
    let actions = row![
        button(text("Apply").size(BODY_FONT_SIZE))
            .padding([6, 14])
            .style(move |_, status| {
                primary_button_style(palette, status, can_apply)
            })
            .on_press_maybe(can_apply.then_some(ThemePickerEvent::ApplyCustom)),
        button(text("Reset").size(BODY_FONT_SIZE))
            .padding([6, 14])
            .style(move |_, status| ghost_button_style(palette, status, false))
            .on_press(ThemePickerEvent::Reset),
    ]
    .spacing(8);

    column![Column::with_children(rows).spacing(8), actions]
        .spacing(12)
        .into()
}

fn hex_color(value: &str) -> Color {
    css_color(value).unwrap_or(Color::TRANSPARENT)
}
