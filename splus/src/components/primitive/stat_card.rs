use iced::widget::{column, container, row, text};
use iced::{Color, Element, Length};

use crate::shared::ui::style::card_style;
use crate::shared::ui::theme::ThemeProps;

const LABEL_FONT_SIZE: f32 = 11.0;
const VALUE_FONT_SIZE: f32 = 22.0;
const CHANGE_FONT_SIZE: f32 = 11.0;

/// Direction of a metric change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trend {
    Up,
    Down,
}

impl Trend {
    pub(crate) fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// Props for a single metric card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatCardProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) value: &'a str,
    pub(crate) change: Option<(&'a str, Trend)>,
    pub(crate) caption: Option<&'a str>,
    pub(crate) accent: Option<Color>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a label, value and optional change line inside a card.
pub(crate) fn view<'a, Message: 'a>(
    props: StatCardProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;
    let value_color = props.accent.unwrap_or(palette.foreground);

    let mut body = column![
        text(props.label)
            .size(LABEL_FONT_SIZE)
            .style(move |_| text::Style { color: Some(muted) }),
        text(props.value)
            .size(VALUE_FONT_SIZE)
            .style(move |_| text::Style {
                color: Some(value_color),
            }),
    ]
    .spacing(4);

    if let Some((change, trend)) = props.change {
        let tone = match trend {
            Trend::Up => palette.success,
            Trend::Down => palette.danger,
        };
        let mut line = row![
            text(format!("{} {change}", trend.arrow()))
                .size(CHANGE_FONT_SIZE)
                .style(move |_| text::Style { color: Some(tone) }),
        ]
        .spacing(4);
        if let Some(caption) = props.caption {
            line = line.push(
                text(caption)
                    .size(CHANGE_FONT_SIZE)
                    .style(move |_| text::Style { color: Some(muted) }),
            );
        }
        body = body.push(line);
    }

    container(body)
        .width(Length::Fill)
        .padding(16)
        .style(card_style(props.theme))
        .into()
}
