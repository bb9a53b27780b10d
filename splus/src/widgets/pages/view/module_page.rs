use iced::widget::{Row, container, text};
use iced::{Element, Length, alignment};
use splus_nav::Resolved;

use super::super::event::PagesEvent;
use super::super::model::{
    MODULE_EMPTY_STATE, MODULE_PLACEHOLDER_VALUE, MODULE_STATS,
};
use super::page_frame;
use crate::components::primitive::page_header::{self, PageHeaderProps};
use crate::components::primitive::stat_card::{self, StatCardProps};
use crate::shared::ui::style::card_style;
use crate::shared::ui::theme::ThemeProps;

const EMPTY_STATE_HEIGHT: f32 = 220.0;
const EMPTY_STATE_SIZE: f32 = 13.0;

/// Props for the generic page of a configured item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModulePageProps<'a> {
    pub(crate) resolved: Resolved,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: ModulePageProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;
    let Resolved {
        cluster,
        section,
        item,
    } = props.resolved;

    let header = page_header::view(PageHeaderProps {
        eyebrow: format!("{} › {}", cluster.label, section.label),
        title: item.label,
        subtitle: None,
        theme: props.theme,
    });

    let stats = Row::with_children(MODULE_STATS.into_iter().map(|label| {
        stat_card::view(StatCardProps {
            label,
            value: MODULE_PLACEHOLDER_VALUE,
            change: None,
            caption: None,
            accent: None,
            theme: props.theme,
        })
    }))
    .spacing(16);

    let empty_state = container(
        text(MODULE_EMPTY_STATE)
            .size(EMPTY_STATE_SIZE)
            .style(move |_| text::Style { color: Some(muted) }),
    )
    .width(Length::Fill)
    .height(Length::Fixed(EMPTY_STATE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(card_style(props.theme));

    page_frame(vec![header, stats.into(), empty_state.into()], props.theme)
}
