use iced::widget::{Column, column, container, text};
use iced::{Element, Length};

use super::super::event::PagesEvent;
use super::super::model::{DASHBOARD_STATS, RECENT_ACTIVITIES};
use super::{metric_row, page_frame};
use crate::components::primitive::page_header::{self, PageHeaderProps};
use crate::shared::ui::style::card_style;
use crate::shared::ui::theme::ThemeProps;

const CARD_TITLE_SIZE: f32 = 15.0;
const ACTION_SIZE: f32 = 13.0;
const META_SIZE: f32 = 11.0;

/// Props for the home dashboard.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DashboardProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: DashboardProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;

    let header = page_header::view(PageHeaderProps {
        eyebrow: String::from("Home"),
        title: "Dashboard",
        subtitle: Some("Welcome back! Here's what's happening today."),
        theme: props.theme,
    });

    let stats =
        metric_row(&DASHBOARD_STATS, Some("from last month"), props.theme);

    let activities = RECENT_ACTIVITIES.iter().map(|(action, actor, when)| {
        column![
            text(*action).size(ACTION_SIZE),
            text(format!("{actor} • {when}"))
                .size(META_SIZE)
                .style(move |_| text::Style { color: Some(muted) }),
        ]
        .spacing(2)
        .into()
    });

    let recent = container(
        column![
            text("Recent Activities").size(CARD_TITLE_SIZE),
            text("Latest actions across the system")
                .size(META_SIZE)
                .style(move |_| text::Style { color: Some(muted) }),
            Column::with_children(activities).spacing(12),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(card_style(props.theme));

    page_frame(vec![header, stats, recent.into()], props.theme)
}
