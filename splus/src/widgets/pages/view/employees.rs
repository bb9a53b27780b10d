use iced::Element;

use super::super::event::PagesEvent;
use super::super::model::{
    EMPLOYEE_HEADERS, EMPLOYEE_STATS, EMPLOYEES, status_tone,
};
use super::{metric_row, page_frame, tone_color};
use crate::components::primitive::data_table::{
    self, DataCell, DataTableProps,
};
use crate::components::primitive::page_header::{self, PageHeaderProps};
use crate::shared::ui::theme::ThemeProps;

const STATUS_COLUMN: usize = 3;

/// Props for the employee directory.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmployeesProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: EmployeesProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();

    let header = page_header::view(PageHeaderProps {
        eyebrow: String::from("People › Employees"),
        title: "All Employees",
        subtitle: Some("Manage your workforce across all sites"),
        theme: props.theme,
    });

    let rows = EMPLOYEES
        .iter()
        .map(|record| {
            record
                .iter()
                .enumerate()
                .map(|(column, value)| {
                    if column == STATUS_COLUMN {
                        let tone = tone_color(palette, status_tone(value));
                        DataCell::badge(*value, tone)
                    } else {
                        DataCell::plain(*value)
                    }
                })
                .collect()
        })
        .collect();

    let table = data_table::view(DataTableProps {
        headers: &EMPLOYEE_HEADERS,
        rows,
        theme: props.theme,
    });

    page_frame(
        vec![header, metric_row(&EMPLOYEE_STATS, None, props.theme), table],
        props.theme,
    )
}
