use iced::widget::{button, container, mouse_area, row, text, tooltip};
use iced::{Border, Element, Length, Shadow, Vector, alignment};
use splus_nav::Cluster;

use super::super::event::DockEvent;
use super::super::model::{
    DOCK_PADDING, DOCK_TILE_SPACING, DockViewModel, HOVER_SCALE, glyph_size,
};
use crate::shared::ui::style::{CARD_RADIUS, popover_style, with_alpha};
use crate::shared::ui::theme::ThemeProps;

const LABEL_FONT_SIZE: f32 = 12.0;

/// Props for rendering the dock.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DockBarProps<'a> {
    pub(crate) vm: DockViewModel<'a>,
    pub(crate) clusters: &'static [Cluster],
    pub(crate) active_cluster_id: &'a str,
    pub(crate) magnification: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one tile per cluster; the wheel changes magnification.
pub(crate) fn view<'a>(props: DockBarProps<'a>) -> Element<'a, DockEvent> {
    let palette = props.theme.theme.iced_palette();

    let tiles = props.clusters.iter().map(|cluster| {
        let is_active = cluster.id == props.active_cluster_id;
        let is_hovered = props.vm.hovered == Some(cluster.id);
        let tile_size = if is_hovered {
            props.magnification * HOVER_SCALE
        } else {
            props.magnification
        };

        let dock_icon = palette.dock_icon;
        let primary = palette.primary;
        let glyph = container(text(cluster.emoji).size(glyph_size(tile_size)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let tile = button(glyph)
            .width(Length::Fixed(tile_size))
            .height(Length::Fixed(tile_size))
            .padding(0)
            .style(move |_, _| button::Style {
                background: Some(
                    if is_active {
                        with_alpha(primary, 0.35)
                    } else {
                        with_alpha(dock_icon, 0.08)
                    }
                    .into(),
                ),
                text_color: dock_icon,
                border: Border {
                    width: if is_active { 1.0 } else { 0.0 },
                    color: primary,
                    radius: CARD_RADIUS.into(),
                },
                ..Default::default()
            })
            .on_press(DockEvent::ClusterPressed(cluster.id.to_string()));

        let hover_area = mouse_area(tile)
            .on_enter(DockEvent::ClusterHovered(Some(cluster.id.to_string())))
            .on_exit(DockEvent::ClusterHovered(None));

        let label = container(text(cluster.label).size(LABEL_FONT_SIZE))
            .padding([4, 8])
            .style(popover_style(props.theme));

        tooltip(hover_area, label, tooltip::Position::Top).into()
    });

    let tiles = row(tiles)
        .spacing(DOCK_TILE_SPACING)
        .align_y(alignment::Vertical::Bottom);

    let dock_bg = palette.dock_bg;
    let border = palette.sidebar_border;
    let shelf = container(tiles).padding(DOCK_PADDING).style(move |_| {
        container::Style {
            background: Some(with_alpha(dock_bg, 0.92).into()),
            border: Border {
                width: 1.0,
                color: border,
                radius: (CARD_RADIUS * 1.6).into(),
            },
            shadow: Shadow {
                color: with_alpha(iced::Color::BLACK, 0.25),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
            ..Default::default()
        }
    });

    mouse_area(shelf).on_scroll(DockEvent::Scrolled).into()
}
