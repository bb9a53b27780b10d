use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::super::event::PagesEvent;
use super::super::model::{ANALYTICS_METRICS, ANALYTICS_MODULES, CARD_COLUMNS};
use super::{card_grid, hex_color, metric_row, page_frame};
use crate::components::primitive::page_header::{self, PageHeaderProps};
use crate::shared::ui::style::card_style;
use crate::shared::ui::theme::ThemeProps;

const MODULE_TITLE_SIZE: f32 = 14.0;
const MODULE_TEXT_SIZE: f32 = 12.0;

/// Props for the analytics hub.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnalyticsProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: AnalyticsProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;

    let header = page_header::view(PageHeaderProps {
        eyebrow: String::from("Insights › Analytics"),
        title: "Analytics",
        subtitle: Some("Cross-module performance at a glance"),
        theme: props.theme,
    });

    let stats =
        metric_row(&ANALYTICS_METRICS, Some("vs last period"), props.theme);

    let cards = ANALYTICS_MODULES
        .iter()
        .map(|(name, description, accent)| {
            let accent = hex_color(accent);
            container(
                column![
                    text(*name).size(MODULE_TITLE_SIZE).style(move |_| {
                        text::Style {
                            color: Some(accent),
                        }
                    }),
                    text(*description)
                        .size(MODULE_TEXT_SIZE)
                        .style(move |_| text::Style { color: Some(muted) }),
                ]
                .spacing(6),
            )
            .padding(16)
            .width(Length::Fill)
            .style(card_style(props.theme))
            .into()
        })
        .collect();

    page_frame(
        vec![header, stats, card_grid(cards, CARD_COLUMNS)],
        props.theme,
    )
}
