use iced::Element;

use super::super::event::PagesEvent;
use super::super::model::{
    PROJECT_HEADERS, PROJECT_STATS, PROJECTS, status_tone,
};
use super::{metric_row, page_frame, tone_color};
use crate::components::primitive::data_table::{
    self, DataCell, DataTableProps,
};
use crate::components::primitive::page_header::{self, PageHeaderProps};
use crate::shared::ui::theme::ThemeProps;

/// Props for the project portfolio.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProjectsProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: ProjectsProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();

    let header = page_header::view(PageHeaderProps {
        eyebrow: String::from("Operations › Projects"),
        title: "All Projects",
        subtitle: Some("Contracts, clients and delivery progress"),
        theme: props.theme,
    });

    let rows = PROJECTS
        .iter()
        .map(|(name, client, value, status, progress)| {
            vec![
                DataCell::plain(*name),
                DataCell::plain(*client),
                DataCell::plain(*value),
                DataCell::badge(
                    *status,
                    tone_color(palette, status_tone(status)),
                ),
                DataCell::plain(format!("{progress}%")),
            ]
        })
        .collect();

    let table = data_table::view(DataTableProps {
        headers: &PROJECT_HEADERS,
        rows,
        theme: props.theme,
    });

    page_frame(
        vec![header, metric_row(&PROJECT_STATS, None, props.theme), table],
        props.theme,
    )
}
