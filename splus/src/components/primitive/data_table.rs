use iced::widget::{Column, Row, Space, container, text};
use iced::{Border, Color, Element, Length};

use crate::shared::ui::style::{card_style, with_alpha};
use crate::shared::ui::theme::ThemeProps;

const HEADER_FONT_SIZE: f32 = 11.0;
const CELL_FONT_SIZE: f32 = 13.0;
const ROW_PADDING: [f32; 2] = [10.0, 16.0];

/// One table cell, optionally drawn as a tinted badge.
#[derive(Debug, Clone)]
pub(crate) struct DataCell {
    text: String,
    badge: Option<Color>,
}

impl DataCell {
    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge: None,
        }
    }

    pub(crate) fn badge(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            badge: Some(color),
        }
    }
}

/// Props for a header row plus body rows in a card.
#[derive(Debug, Clone)]
pub(crate) struct DataTableProps<'a> {
    pub(crate) headers: &'a [&'a str],
    pub(crate) rows: Vec<Vec<DataCell>>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render equally sized columns with a divider under the header.
pub(crate) fn view<'a, Message: 'a>(
    props: DataTableProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;

    let header = Row::with_children(props.headers.iter().map(|title| {
        text(title.to_uppercase())
            .size(HEADER_FONT_SIZE)
            .width(Length::FillPortion(1))
            .style(move |_| text::Style { color: Some(muted) })
            .into()
    }))
    .padding(ROW_PADDING);

    let body = props.rows.into_iter().map(|cells| {
        Row::with_children(cells.into_iter().map(cell))
            .padding(ROW_PADDING)
            .into()
    });

    let border = palette.border;
    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(border.into()),
            ..Default::default()
        });

    let table = Column::new().push(header).push(divider).extend(body);

    container(table)
        .width(Length::Fill)
        .style(card_style(props.theme))
        .into()
}

fn cell<'a, Message: 'a>(cell: DataCell) -> Element<'a, Message> {
    let label = text(cell.text).size(CELL_FONT_SIZE);
    let content: Element<'a, Message> = match cell.badge {
        Some(color) => container(label.size(CELL_FONT_SIZE - 2.0))
            .padding([2, 8])
            .style(move |_| container::Style {
                background: Some(with_alpha(color, 0.14).into()),
                text_color: Some(color),
                border: Border {
                    radius: 999.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
        None => label.into(),
    };

    container(content).width(Length::FillPortion(1)).into()
}
