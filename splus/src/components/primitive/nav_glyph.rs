use iced::widget::{container, text};
use iced::{Color, Element, Length, alignment};
use splus_nav::icons::{infer_item_icon, item_color};

use crate::shared::ui::theme::css_color;

/// Props for a fixed-size glyph cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavGlyphProps<'a> {
    pub(crate) glyph: &'a str,
    pub(crate) color: Color,
    pub(crate) size: f32,
}

impl NavGlyphProps<'static> {
    /// Glyph and accent color inferred from an item label.
    pub(crate) fn for_item(label: &str, cluster_id: &str, size: f32) -> Self {
        let color = css_color(item_color(label, cluster_id))
            .unwrap_or(Color::WHITE);

        Self {
            glyph: infer_item_icon(label).glyph(),
            color,
            size,
        }
    }
}

/// Render a centered glyph in a square cell.
pub(crate) fn view<'a, Message: 'a>(
    props: NavGlyphProps<'a>,
) -> Element<'a, Message> {
    let color = props.color;
    let glyph = text(props.glyph)
        .size(props.size)
        .style(move |_| text::Style { color: Some(color) });

    container(glyph)
        .width(Length::Fixed(props.size * 1.4))
        .height(Length::Fixed(props.size * 1.4))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::NavGlyphProps;

    #[test]
    fn given_invoice_label_when_building_props_then_form_glyph_and_green_are_used()
     {
        let props = NavGlyphProps::for_item("Invoice", "billing-acc", 12.0);

        assert_eq!(props.glyph, "▤");
        assert_eq!(props.color, iced::Color::from_rgb8(0x34, 0xd3, 0x99));
    }
}
