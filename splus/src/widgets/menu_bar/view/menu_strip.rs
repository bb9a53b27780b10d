use iced::widget::{button, container, row, text};
use iced::{Element, Length, alignment};
use splus_nav::Cluster;
use splus_nav::resolver::section_contains;
use splus_nav::taxonomy::SETTINGS_CLUSTER_ID;

use super::super::event::MenuBarEvent;
use super::super::model::{
    MENU_BAR_HEIGHT, MENU_BAR_PADDING, MENU_BUTTON_WIDTH, SETTINGS_LABEL,
};
use crate::shared::ui::style::{ghost_button_style, panel_style};
use crate::shared::ui::theme::ThemeProps;

const LABEL_FONT_SIZE: f32 = 13.0;

/// Props for rendering the section strip.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuStripProps<'a> {
    pub(crate) cluster: &'static Cluster,
    pub(crate) open_menu_id: Option<&'a str>,
    pub(crate) location: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one toggle button per section, or the settings caption.
pub(crate) fn view<'a>(props: MenuStripProps<'a>) -> Element<'a, MenuBarEvent> {
    let palette = props.theme.theme.iced_palette();

    let content: Element<'a, MenuBarEvent> =
        if props.cluster.id == SETTINGS_CLUSTER_ID {
            let foreground = palette.foreground;
            text(SETTINGS_LABEL)
                .size(LABEL_FONT_SIZE + 1.0)
                .style(move |_| text::Style {
                    color: Some(foreground),
                })
                .into()
        } else {
            let buttons = props.cluster.sections.iter().map(|section| {
                let is_open = props.open_menu_id == Some(section.id);
                let is_highlighted =
                    is_open || section_contains(section, props.location);
                let caret = if is_open { "▴" } else { "▾" };
                let label = row![
                    text(section.label).size(LABEL_FONT_SIZE),
                    text(caret).size(LABEL_FONT_SIZE - 2.0),
                ]
                .spacing(6)
                .align_y(alignment::Vertical::Center);

                button(label)
                    .width(Length::Fixed(MENU_BUTTON_WIDTH))
                    .padding([6, 10])
                    .style(move |_, status| {
                        ghost_button_style(palette, status, is_highlighted)
                    })
                    .on_press(MenuBarEvent::SectionPressed(
                        section.id.to_string(),
                    ))
                    .into()
            });
            row(buttons).align_y(alignment::Vertical::Center).into()
        };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(MENU_BAR_HEIGHT))
        .padding([0.0, MENU_BAR_PADDING])
        .align_y(alignment::Vertical::Center)
        .style(panel_style(palette.surface, palette.border))
        .into()
}
