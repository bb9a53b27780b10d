use iced::widget::{button, column, container, text};
use iced::{Element, Length, alignment};

use super::super::event::PagesEvent;
use crate::shared::ui::style::primary_button_style;
use crate::shared::ui::theme::ThemeProps;
use crate::state::HOME_PATH;

const TITLE_FONT_SIZE: f32 = 22.0;
const BODY_FONT_SIZE: f32 = 13.0;

/// Props for the fallback page of unknown locations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotFoundProps<'a> {
    pub(crate) location: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: NotFoundProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;

    let content = column![
        text("Page not found").size(TITLE_FONT_SIZE),
        text(format!("Nothing is configured at {}", props.location))
            .size(BODY_FONT_SIZE)
            .style(move |_| text::Style { color: Some(muted) }),
        button(text("Back to dashboard").size(BODY_FONT_SIZE))
            .padding([8, 14])
            .style(move |_, status| primary_button_style(palette, status, true))
            .on_press(PagesEvent::NavigateTo(HOME_PATH.to_string())),
    ]
    .spacing(12)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
