use iced::Element;

use super::super::event::PagesEvent;
use super::super::model::{
    BILLING_STATS, INVOICE_HEADERS, INVOICES, status_tone,
};
use super::{metric_row, page_frame, tone_color};
use crate::components::primitive::data_table::{
    self, DataCell, DataTableProps,
};
use crate::components::primitive::page_header::{self, PageHeaderProps};
use crate::shared::ui::theme::ThemeProps;

/// Props for the billing overview.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BillingProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: BillingProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();

    let header = page_header::view(PageHeaderProps {
        eyebrow: String::from("Finance › Billing"),
        title: "Billing",
        subtitle: Some("Invoices, collections and outstanding balances"),
        theme: props.theme,
    });

    let rows = INVOICES
        .iter()
        .map(|[number, client, amount, due, status]| {
            vec![
                DataCell::plain(*number),
                DataCell::plain(*client),
                DataCell::plain(*amount),
                DataCell::plain(*due),
                DataCell::badge(
                    *status,
                    tone_color(palette, status_tone(status)),
                ),
            ]
        })
        .collect();

    let table = data_table::view(DataTableProps {
        headers: &INVOICE_HEADERS,
        rows,
        theme: props.theme,
    });

    page_frame(
        vec![header, metric_row(&BILLING_STATS, None, props.theme), table],
        props.theme,
    )
}
