use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, column, row, text};
use iced::{Border, Element, Length, alignment};
use splus_nav::Resolved;

use super::super::event::PagesEvent;
use super::super::model::{CARD_COLUMNS, settings_description};
use super::{card_grid, page_frame};
use crate::components::primitive::nav_glyph::{self, NavGlyphProps};
use crate::components::primitive::page_header::{self, PageHeaderProps};
use crate::shared::ui::style::{CARD_RADIUS, with_alpha};
use crate::shared::ui::theme::ThemeProps;

const CARD_TITLE_SIZE: f32 = 14.0;
const CARD_TEXT_SIZE: f32 = 12.0;
const GLYPH_SIZE: f32 = 14.0;

/// Props for the settings hub rendered for any settings item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsGridProps<'a> {
    pub(crate) resolved: Resolved,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(
    props: SettingsGridProps<'a>,
) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;
    let cluster = props.resolved.cluster;
    let active_path = props.resolved.item.path;

    let header = page_header::view(PageHeaderProps {
        eyebrow: String::from("System Settings"),
        title: props.resolved.item.label,
        subtitle: Some(settings_description(active_path)),
        theme: props.theme,
    });

    let cards = cluster
        .items()
        .map(|(_, item)| {
            let is_active = item.path == active_path;
            let glyph = nav_glyph::view(NavGlyphProps::for_item(
                item.label,
                cluster.id,
                GLYPH_SIZE,
            ));

            let body = column![
                row![glyph, text(item.label).size(CARD_TITLE_SIZE)]
                    .spacing(8)
                    .align_y(alignment::Vertical::Center),
                text(settings_description(item.path))
                    .size(CARD_TEXT_SIZE)
                    .style(move |_| text::Style { color: Some(muted) }),
            ]
            .spacing(6);

            button(body)
                .width(Length::Fill)
                .padding(16)
                .style(move |_, status| {
                    let border_color = if is_active {
                        palette.primary
                    } else {
                        palette.border
                    };
                    let background = match (is_active, status) {
                        (true, _) => with_alpha(palette.primary, 0.08),
                        (false, ButtonStatus::Hovered) => {
                            with_alpha(palette.foreground, 0.04)
                        },
                        _ => palette.surface,
                    };

                    button::Style {
                        background: Some(background.into()),
                        text_color: palette.foreground,
                        border: Border {
                            width: if is_active { 2.0 } else { 1.0 },
                            color: border_color,
                            radius: CARD_RADIUS.into(),
                        },
                        ..Default::default()
                    }
                })
                .on_press(PagesEvent::NavigateTo(item.path.to_string()))
                .into()
        })
        .collect();

    page_frame(vec![header, card_grid(cards, CARD_COLUMNS)], props.theme)
}
