use iced::widget::{button, container, text};
use iced::{Element, Length, alignment};

use super::super::event::LeftSidebarEvent;
use super::super::model::EXPANDER_WIDTH;
use crate::shared::ui::style::{panel_style, sidebar_row_style};
use crate::shared::ui::theme::ThemeProps;

/// Props for rendering the collapsed sidebar strip.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExpanderProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the thin strip that re-opens a collapsed sidebar.
pub(crate) fn view<'a>(
    props: ExpanderProps<'a>,
) -> Element<'a, LeftSidebarEvent> {
    let palette = props.theme.theme.iced_palette();

    let toggle = button(
        container(text("»").size(12))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(0)
    .style(move |_, status| sidebar_row_style(palette, status, false))
    .on_press(LeftSidebarEvent::ToggleCollapsed);

    container(toggle)
        .width(Length::Fixed(EXPANDER_WIDTH))
        .height(Length::Fill)
        .style(panel_style(palette.sidebar, palette.sidebar_border))
        .into()
}
