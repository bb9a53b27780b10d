pub(crate) mod analytics;
pub(crate) mod billing;
pub(crate) mod dashboard;
pub(crate) mod employees;
pub(crate) mod login;
pub(crate) mod module_page;
pub(crate) mod not_found;
pub(crate) mod projects;
pub(crate) mod settings_grid;

use iced::widget::{Column, Row, Space, container, scrollable};
use iced::{Color, Element, Length};

use super::event::PagesEvent;
use super::model::{Metric, PAGE_PADDING, PAGE_SPACING, StatusTone};
use crate::components::primitive::stat_card::{self, StatCardProps};
use crate::shared::ui::style::thin_scroll_style;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, css_color};

/// Wrap page sections in a padded vertical scroller.
fn page_frame<'a>(
    sections: Vec<Element<'a, PagesEvent>>,
    theme: ThemeProps<'a>,
) -> Element<'a, PagesEvent> {
    let palette = theme.theme.iced_palette();
    let body = Column::with_children(sections)
        .spacing(PAGE_SPACING)
        .padding(PAGE_PADDING)
        .width(Length::Fill);

    scrollable(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(thin_scroll_style(palette.muted_foreground))
        .into()
}

/// Lay metric cards out in one row of equal columns.
fn metric_row<'a>(
    metrics: &'a [Metric],
    caption: Option<&'a str>,
    theme: ThemeProps<'a>,
) -> Element<'a, PagesEvent> {
    Row::with_children(metrics.iter().map(|metric| {
        stat_card::view(StatCardProps {
            label: metric.label,
            value: metric.value,
            change: metric.change,
            caption,
            accent: metric.accent.map(hex_color),
            theme,
        })
    }))
    .spacing(16)
    .into()
}

/// Split `cards` into rows of `columns`, padding the last row.
fn card_grid<'a>(
    cards: Vec<Element<'a, PagesEvent>>,
    columns: usize,
) -> Element<'a, PagesEvent> {
    let mut rows = Column::new().spacing(12);
    let mut cards = cards.into_iter().peekable();

    while cards.peek().is_some() {
        let mut row = Row::new().spacing(12);
        for slot in 0..columns {
            row = match cards.next() {
                Some(card) => row.push(container(card).width(Length::Fill)),
                None if slot > 0 => row.push(Space::new().width(Length::Fill)),
                None => row,
            };
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn tone_color(palette: &IcedColorPalette, tone: StatusTone) -> Color {
    match tone {
        StatusTone::Positive => palette.success,
        StatusTone::Caution => palette.warning,
        StatusTone::Critical => palette.danger,
    }
}

fn hex_color(value: &str) -> Color {
    css_color(value).unwrap_or(Color::BLACK)
}
