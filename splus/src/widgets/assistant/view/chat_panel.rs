use iced::widget::{
    Column, Space, button, column, container, row, scrollable, text,
    text_input,
};
use iced::{Border, Element, Length, Padding, alignment};

use super::super::event::AssistantEvent;
use super::super::model::{
    AssistantViewModel, ChatMessage, ChatRole, DRAFT_PLACEHOLDER, PANEL_TITLE,
    SUGGESTIONS, SUGGESTIONS_LABEL, TYPING_LABEL, display_text,
    shows_suggestions,
};
use crate::components::primitive::resize_handle::{
    self, ResizeHandleEvent, ResizeHandleProps,
};
use crate::shared::ui::style::{
    CARD_RADIUS, ghost_button_style, panel_style, primary_button_style,
    text_input_style, thin_scroll_style, with_alpha,
};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const TITLE_FONT_SIZE: f32 = 14.0;
const MESSAGE_FONT_SIZE: f32 = 13.0;
const HEADER_HEIGHT: f32 = 48.0;
const BUBBLE_PADDING: [f32; 2] = [8.0, 12.0];
const BUBBLE_MAX_SHARE: f32 = 0.82;
const PANEL_PADDING: f32 = 12.0;
const SUGGESTION_FONT_SIZE: f32 = 12.0;
const SUGGESTION_LABEL_SIZE: f32 = 10.5;

/// Props for rendering the assistant panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChatPanelProps<'a> {
    pub(crate) vm: AssistantViewModel<'a>,
    pub(crate) width: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the conversation, composer and left resize handle.
pub(crate) fn view<'a>(
    props: ChatPanelProps<'a>,
) -> Element<'a, AssistantEvent> {
    let palette = props.theme.theme.iced_palette();
    let primary = palette.primary;

    let header = row![
        text(format!("✦ {PANEL_TITLE}"))
            .size(TITLE_FONT_SIZE)
            .style(move |_| text::Style {
                color: Some(primary),
            }),
        Space::new().width(Length::Fill),
        button(text("✕").size(TITLE_FONT_SIZE))
            .padding([2, 8])
            .style(move |_, status| ghost_button_style(palette, status, false))
            .on_press(AssistantEvent::Close),
    ]
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center);

    let bubble_width = (props.width - 2.0 * PANEL_PADDING) * BUBBLE_MAX_SHARE;
    let mut messages = Column::with_children(
        props
            .vm
            .messages
            .iter()
            .map(|message| bubble(palette, message, bubble_width)),
    )
    .spacing(10);

    if props.vm.is_typing {
        let muted = palette.muted_foreground;
        let typing = text(TYPING_LABEL)
            .size(MESSAGE_FONT_SIZE)
            .style(move |_| text::Style { color: Some(muted) });
        messages = messages.push(typing);
    }

    let conversation = scrollable(messages.padding([8, 0]))
        .anchor_bottom()
        .height(Length::Fill)
        .style(thin_scroll_style(palette.muted_foreground));

    let can_send = !props.vm.draft.trim().is_empty();
    let send = button(text("➤").size(MESSAGE_FONT_SIZE))
        .padding([8, 12])
        .style(move |_, status| primary_button_style(palette, status, can_send))
        .on_press_maybe(can_send.then_some(AssistantEvent::Submit));

    let composer = row![
        text_input(DRAFT_PLACEHOLDER, props.vm.draft)
            .on_input(AssistantEvent::DraftChanged)
            .on_submit(AssistantEvent::Submit)
            .padding([8, 10])
            .size(MESSAGE_FONT_SIZE)
            .style(text_input_style(props.theme)),
        send,
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    let mut content = column![header, conversation].spacing(8);
    if shows_suggestions(props.vm.messages) {
        content = content.push(suggestions(palette));
    }

    let content = content
        .push(composer)
        .padding(Padding {
            top: 0.0,
            right: PANEL_PADDING,
            bottom: PANEL_PADDING,
            left: PANEL_PADDING,
        });

    let handle = resize_handle::view(ResizeHandleProps {
        theme: props.theme,
        is_dragging: props.vm.is_dragging,
    })
    .map(|ResizeHandleEvent::Pressed| AssistantEvent::ResizeStarted);

    container(row![handle, container(content).width(Length::Fill)])
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .style(panel_style(palette.surface, palette.border))
        .into()
}

fn suggestions<'a>(
    palette: &'a IcedColorPalette,
) -> Element<'a, AssistantEvent> {
    let muted = palette.muted_foreground;
    let label = text(SUGGESTIONS_LABEL)
        .size(SUGGESTION_LABEL_SIZE)
        .style(move |_| text::Style { color: Some(muted) });

    let mut items: Vec<Element<'a, AssistantEvent>> = vec![label.into()];
    for prompt in SUGGESTIONS {
        items.push(
            button(text(prompt).size(SUGGESTION_FONT_SIZE))
                .width(Length::Fill)
                .padding([8, 12])
                .style(move |_, status| {
                    ghost_button_style(palette, status, false)
                })
                .on_press(AssistantEvent::SuggestionPressed(prompt))
                .into(),
        );
    }

    Column::with_children(items).spacing(6).into()
}

fn bubble<'a>(
    palette: &'a IcedColorPalette,
    message: &'a ChatMessage,
    max_width: f32,
) -> Element<'a, AssistantEvent> {
    let is_user = message.role == ChatRole::User;
    let (background, foreground) = if is_user {
        (palette.primary, iced::Color::WHITE)
    } else {
        (with_alpha(palette.foreground, 0.05), palette.foreground)
    };

    let label = text(display_text(&message.text)).size(MESSAGE_FONT_SIZE);
    let body = container(label)
        .max_width(max_width)
        .padding(BUBBLE_PADDING)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: Border {
                radius: CARD_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let align = if is_user {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    };

    container(body).width(Length::Fill).align_x(align).into()
}
