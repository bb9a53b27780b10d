use iced::widget::{Row, button, column, container, text, text_input};
use iced::{Element, Font, Length, alignment, font};

use super::super::event::PagesEvent;
use super::super::model::{LoginMethod, PagesViewModel};
use crate::shared::ui::style::{
    card_style, ghost_button_style, primary_button_style, text_input_style,
};
use crate::shared::ui::theme::{StyleOverrides, ThemeProps};

const BRAND_LABEL: &str = "S-Plus";
const BRAND_CAPTION: &str = "Management";
const OTP_LABEL: &str = "One-Time Password";
const OTP_PLACEHOLDER: &str = "Enter OTP";
const FORM_WIDTH: f32 = 380.0;
const FORM_RADIUS: f32 = 16.0;
const BRAND_FONT_SIZE: f32 = 26.0;
const LABEL_FONT_SIZE: f32 = 12.0;
const HINT_FONT_SIZE: f32 = 11.0;

/// Props for the full-screen sign-in form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoginProps<'a> {
    pub(crate) vm: PagesViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: LoginProps<'a>) -> Element<'a, PagesEvent> {
    let palette = props.theme.theme.iced_palette();
    let muted = palette.muted_foreground;
    let primary = palette.primary;
    let method = props.vm.login_method;

    let brand = column![
        text(BRAND_LABEL)
            .size(BRAND_FONT_SIZE)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .style(move |_| text::Style {
                color: Some(primary),
            }),
        text(BRAND_CAPTION)
            .size(LABEL_FONT_SIZE)
            .style(move |_| text::Style { color: Some(muted) }),
    ]
    .spacing(2)
    .align_x(alignment::Horizontal::Center);

    let tabs = Row::with_children(LoginMethod::ALL.into_iter().map(|option| {
        let is_active = option == method;
        button(
            container(text(option.label()).size(LABEL_FONT_SIZE))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .padding([6, 10])
        .style(move |_, status| ghost_button_style(palette, status, is_active))
        .on_press(PagesEvent::LoginMethodSelected(option))
        .into()
    }))
    .spacing(4);

    let field_label = |label: &'static str| {
        text(label)
            .size(LABEL_FONT_SIZE)
            .style(move |_| text::Style { color: Some(muted) })
    };

    let identifier = text_input(method.placeholder(), props.vm.identifier)
        .on_input(PagesEvent::IdentifierChanged)
        .on_submit(PagesEvent::SignIn)
        .padding([8, 10])
        .style(text_input_style(props.theme));

    let otp = text_input(OTP_PLACEHOLDER, props.vm.otp)
        .on_input(PagesEvent::OtpChanged)
        .on_submit(PagesEvent::SignIn)
        .padding([8, 10])
        .style(text_input_style(props.theme));

    let sign_in = button(
        container(text("Sign In").size(14))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([10, 12])
    .style(move |_, status| primary_button_style(palette, status, true))
    .on_press(PagesEvent::SignIn);

    let form = column![
        brand,
        tabs,
        column![field_label(method.field_label()), identifier].spacing(6),
        column![
            field_label(OTP_LABEL),
            otp,
            text(method.otp_hint())
                .size(HINT_FONT_SIZE)
                .style(move |_| text::Style { color: Some(muted) }),
        ]
        .spacing(6),
        sign_in,
    ]
    .spacing(18);

    let card_theme = props.theme.with_overrides(StyleOverrides {
        border_radius: Some(FORM_RADIUS),
        ..StyleOverrides::default()
    });
    let card = container(form)
        .width(Length::Fixed(FORM_WIDTH))
        .padding(28)
        .style(card_style(card_theme));

    let canvas = palette.canvas;
    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(canvas.into()),
            ..Default::default()
        })
        .into()
}
