use iced::widget::{Column, text};
use iced::{Element, Font, font};

use crate::shared::ui::theme::ThemeProps;

const EYEBROW_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 24.0;
const SUBTITLE_FONT_SIZE: f32 = 13.0;

/// Props for a page heading with breadcrumb eyebrow.
#[derive(Debug, Clone)]
pub(crate) struct PageHeaderProps<'a> {
    pub(crate) eyebrow: String,
    pub(crate) title: &'a str,
    pub(crate) subtitle: Option<&'a str>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the eyebrow, title and optional subtitle stack.
pub(crate) fn view<'a, Message: 'a>(
    props: PageHeaderProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let primary = palette.primary;
    let foreground = palette.foreground;
    let muted = palette.muted_foreground;

    let mut header = Column::new()
        .spacing(4)
        .push(
            text(props.eyebrow.to_uppercase())
                .size(EYEBROW_FONT_SIZE)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .style(move |_| text::Style {
                    color: Some(primary),
                }),
        )
        .push(
            text(props.title)
                .size(TITLE_FONT_SIZE)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .style(move |_| text::Style {
                    color: Some(foreground),
                }),
        );

    if let Some(subtitle) = props.subtitle {
        header = header.push(
            text(subtitle)
                .size(SUBTITLE_FONT_SIZE)
                .style(move |_| text::Style { color: Some(muted) }),
        );
    }

    header.into()
}
