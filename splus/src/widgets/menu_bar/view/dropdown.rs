use iced::widget::{Column, button, container, mouse_area, row, text};
use iced::{Element, Length, Padding, alignment};
use splus_nav::{Cluster, Section, matches_path};

use super::super::event::MenuBarEvent;
use super::super::model::{
    DROPDOWN_ROW_HEIGHT, DROPDOWN_WIDTH, MenuBarViewModel, dropdown_offset,
};
use crate::components::primitive::nav_glyph::{self, NavGlyphProps};
use crate::shared::ui::style::{ghost_button_style, popover_style};
use crate::shared::ui::theme::ThemeProps;

const ITEM_FONT_SIZE: f32 = 13.0;
const GLYPH_SIZE: f32 = 12.0;

/// Props for rendering an open section dropdown.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DropdownProps<'a> {
    pub(crate) vm: MenuBarViewModel<'a>,
    pub(crate) cluster: &'static Cluster,
    pub(crate) section: &'static Section,
    pub(crate) index: usize,
    pub(crate) location: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the item list of the open section under its button.
pub(crate) fn view<'a>(props: DropdownProps<'a>) -> Element<'a, MenuBarEvent> {
    let palette = props.theme.theme.iced_palette();

    let rows = props.section.items.iter().map(|item| {
        let is_active = matches_path(item.path, props.location)
            || props.vm.hovered_item == Some(item.path);
        let glyph = nav_glyph::view(NavGlyphProps::for_item(
            item.label,
            props.cluster.id,
            GLYPH_SIZE,
        ));
        let label = row![glyph, text(item.label).size(ITEM_FONT_SIZE)]
            .spacing(8)
            .align_y(alignment::Vertical::Center);

        let entry = button(label)
            .width(Length::Fill)
            .height(Length::Fixed(DROPDOWN_ROW_HEIGHT))
            .padding([0, 8])
            .style(move |_, status| {
                ghost_button_style(palette, status, is_active)
            })
            .on_press(MenuBarEvent::ItemPressed(item.path.to_string()));

        mouse_area(entry)
            .on_enter(MenuBarEvent::ItemHovered(Some(item.path.to_string())))
            .on_exit(MenuBarEvent::ItemHovered(None))
            .into()
    });

    let panel = container(Column::with_children(rows).spacing(2))
        .width(Length::Fixed(DROPDOWN_WIDTH))
        .padding(6)
        .style(popover_style(props.theme));

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: dropdown_offset(props.index),
            ..Padding::ZERO
        })
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .into()
}
