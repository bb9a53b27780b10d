use iced::widget::{
    Column, Row, Space, button, column, container, row, scrollable, text,
};
use iced::{Element, Length, Padding, alignment};
use splus_nav::{Cluster, matches_path};

use super::super::event::LeftSidebarEvent;
use super::super::model::{
    CLUSTER_GRID_COLUMNS, HEADER_HEIGHT, ITEM_ROW_HEIGHT, LeftSidebarViewModel,
    SECTION_ROW_HEIGHT,
};
use crate::components::primitive::nav_glyph::{self, NavGlyphProps};
use crate::components::primitive::resize_handle::{
    self, ResizeHandleEvent, ResizeHandleProps,
};
use crate::shared::ui::style::{
    panel_style, sidebar_row_style, thin_scroll_style,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const TITLE_FONT_SIZE: f32 = 15.0;
const ITEM_FONT_SIZE: f32 = 13.0;
const SECTION_FONT_SIZE: f32 = 11.0;
const GLYPH_SIZE: f32 = 12.0;
const CLUSTER_TILE_SIZE: f32 = 34.0;
const PANEL_PADDING: f32 = 10.0;

/// Props for rendering the expanded left sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarPanelProps<'a> {
    pub(crate) vm: LeftSidebarViewModel<'a>,
    pub(crate) cluster: &'static Cluster,
    pub(crate) clusters: &'static [Cluster],
    pub(crate) location: &'a str,
    pub(crate) width: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the cluster header, switcher, sections and resize handle.
pub(crate) fn view<'a>(
    props: SidebarPanelProps<'a>,
) -> Element<'a, LeftSidebarEvent> {
    let palette = props.theme.theme.iced_palette();

    let content = column![
        header(palette, props.cluster),
        cluster_grid(palette, props.clusters, props.cluster.id),
        scrollable(sections(palette, props))
            .height(Length::Fill)
            .style(thin_scroll_style(palette.sidebar_text_muted)),
    ]
    .spacing(8)
    .padding([0.0, PANEL_PADDING]);

    let handle = resize_handle::view(ResizeHandleProps {
        theme: props.theme,
        is_dragging: props.vm.is_dragging,
    })
    .map(|ResizeHandleEvent::Pressed| LeftSidebarEvent::ResizeStarted);

    let body = row![container(content).width(Length::Fill), handle]
        .height(Length::Fill);

    container(body)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(panel_style(palette.sidebar, palette.sidebar_border))
        .into()
}

fn header<'a>(
    palette: &'a IcedColorPalette,
    cluster: &'static Cluster,
) -> Element<'a, LeftSidebarEvent> {
    let title = row![
        text(cluster.emoji).size(TITLE_FONT_SIZE + 2.0),
        text(cluster.label).size(TITLE_FONT_SIZE),
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    let collapse = button(text("«").size(TITLE_FONT_SIZE))
        .padding([2, 8])
        .style(move |_, status| sidebar_row_style(palette, status, false))
        .on_press(LeftSidebarEvent::ToggleCollapsed);

    let sidebar_text = palette.sidebar_text;
    container(
        row![title, Space::new().width(Length::Fill), collapse]
            .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        text_color: Some(sidebar_text),
        ..Default::default()
    })
    .into()
}

fn cluster_grid<'a>(
    palette: &'a IcedColorPalette,
    clusters: &'static [Cluster],
    active_id: &'static str,
) -> Element<'a, LeftSidebarEvent> {
    let rows = clusters.chunks(CLUSTER_GRID_COLUMNS).map(|chunk| {
        let tiles = chunk.iter().map(|cluster| {
            let is_active = cluster.id == active_id;
            button(
                container(text(cluster.emoji).size(ITEM_FONT_SIZE + 2.0))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            )
            .width(Length::Fixed(CLUSTER_TILE_SIZE))
            .height(Length::Fixed(CLUSTER_TILE_SIZE))
            .padding(0)
            .style(move |_, status| {
                sidebar_row_style(palette, status, is_active)
            })
            .on_press(LeftSidebarEvent::ClusterPressed(cluster.id.to_string()))
            .into()
        });
        Row::with_children(tiles).spacing(4).into()
    });

    Column::with_children(rows).spacing(4).into()
}

fn sections<'a>(
    palette: &'a IcedColorPalette,
    props: SidebarPanelProps<'a>,
) -> Element<'a, LeftSidebarEvent> {
    let cluster = props.cluster;
    let show_headers = cluster.sections.len() > 1;
    let mut list = Column::new().spacing(2);

    for section in cluster.sections {
        let is_collapsed =
            show_headers && props.vm.is_section_collapsed(section.id);

        if show_headers {
            let caret = if is_collapsed { "▸" } else { "▾" };
            let label = row![
                text(section.label.to_uppercase()).size(SECTION_FONT_SIZE),
                Space::new().width(Length::Fill),
                text(caret).size(SECTION_FONT_SIZE),
            ]
            .align_y(alignment::Vertical::Center);

            list = list.push(
                button(label)
                    .width(Length::Fill)
                    .height(Length::Fixed(SECTION_ROW_HEIGHT))
                    .padding([0, 8])
                    .style(move |_, status| {
                        sidebar_row_style(palette, status, false)
                    })
                    .on_press(LeftSidebarEvent::SectionToggled(
                        section.id.to_string(),
                    )),
            );
        }

        if is_collapsed {
            continue;
        }

        for item in section.items {
            let is_active = matches_path(item.path, props.location);
            let glyph = nav_glyph::view(NavGlyphProps::for_item(
                item.label,
                cluster.id,
                GLYPH_SIZE,
            ));
            let label = row![glyph, text(item.label).size(ITEM_FONT_SIZE)]
                .spacing(6)
                .align_y(alignment::Vertical::Center);

            list = list.push(
                button(label)
                    .width(Length::Fill)
                    .height(Length::Fixed(ITEM_ROW_HEIGHT))
                    .padding([0, 6])
                    .style(move |_, status| {
                        sidebar_row_style(palette, status, is_active)
                    })
                    .on_press(LeftSidebarEvent::ItemPressed(
                        item.path.to_string(),
                    )),
            );
        }
    }

    list.padding(Padding {
        bottom: 16.0,
        ..Padding::ZERO
    })
    .into()
}
