use iced::widget::{
    Column, Space, button, column, container, mouse_area, row, scrollable,
    text,
};
use iced::{Element, Length, alignment};
use splus_nav::{Cluster, matches_path};

use super::super::event::SettingsSidebarEvent;
use super::super::model::{ROW_HEIGHT, SettingsSidebarViewModel, TITLE};
use crate::components::primitive::nav_glyph::{self, NavGlyphProps};
use crate::shared::ui::style::{
    panel_style, sidebar_row_style, thin_scroll_style,
};
use crate::shared::ui::theme::ThemeProps;

const TITLE_FONT_SIZE: f32 = 15.0;
const ITEM_FONT_SIZE: f32 = 13.0;
const GLYPH_SIZE: f32 = 12.0;

/// Props for rendering the settings list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsListProps<'a> {
    pub(crate) vm: SettingsSidebarViewModel<'a>,
    pub(crate) cluster: &'static Cluster,
    pub(crate) location: &'a str,
    pub(crate) width: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render every settings item as one flat list.
pub(crate) fn view<'a>(
    props: SettingsListProps<'a>,
) -> Element<'a, SettingsSidebarEvent> {
    let palette = props.theme.theme.iced_palette();
    let sidebar_text = palette.sidebar_text;

    let header = row![
        text(format!("{} {TITLE}", props.cluster.emoji))
            .size(TITLE_FONT_SIZE)
            .style(move |_| text::Style {
                color: Some(sidebar_text),
            }),
        Space::new().width(Length::Fill),
        button(text("«").size(TITLE_FONT_SIZE))
            .padding([2, 8])
            .style(move |_, status| sidebar_row_style(palette, status, false))
            .on_press(SettingsSidebarEvent::Collapse),
    ]
    .height(Length::Fixed(48.0))
    .align_y(alignment::Vertical::Center);

    let rows = props.cluster.items().map(|(_, item)| {
        let is_active = matches_path(item.path, props.location)
            || props.vm.hovered_item == Some(item.path);
        let glyph = nav_glyph::view(NavGlyphProps::for_item(
            item.label,
            props.cluster.id,
            GLYPH_SIZE,
        ));

        let entry = button(
            row![glyph, text(item.label).size(ITEM_FONT_SIZE)]
                .spacing(6)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0, 6])
        .style(move |_, status| sidebar_row_style(palette, status, is_active))
        .on_press(SettingsSidebarEvent::ItemPressed(item.path.to_string()));

        mouse_area(entry)
            .on_enter(SettingsSidebarEvent::ItemHovered(Some(
                item.path.to_string(),
            )))
            .on_exit(SettingsSidebarEvent::ItemHovered(None))
            .into()
    });

    let list = scrollable(Column::with_children(rows).spacing(2))
        .height(Length::Fill)
        .style(thin_scroll_style(palette.sidebar_text_muted));

    container(column![header, list].spacing(8).padding([0, 10]))
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(panel_style(palette.sidebar, palette.sidebar_border))
        .into()
}
