use iced::Task;

use super::event::{PagesEffect, PagesEvent};
use super::state::PagesState;
use crate::state::HOME_PATH;

/// Reduce a page event into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut PagesState,
    event: PagesEvent,
) -> Task<PagesEffect> {
    match event {
        PagesEvent::LoginMethodSelected(method) => {
            state.select_login_method(method);
            Task::none()
        },
        PagesEvent::IdentifierChanged(value) => {
            state.set_identifier(value);
            Task::none()
        },
        PagesEvent::OtpChanged(value) => {
            state.set_otp(value);
            Task::none()
        },
        PagesEvent::SignIn => {
            log::info!("signing in via {:?}", state.login_method());
            state.clear_login();
            Task::done(PagesEffect::Navigate(HOME_PATH.to_string()))
        },
        PagesEvent::NavigateTo(path) => Task::done(PagesEffect::Navigate(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::pages::model::LoginMethod;

    #[test]
    fn given_typed_email_when_switching_to_mobile_then_identifier_is_cleared() {
        let mut state = PagesState::default();
        let _ = reduce(
            &mut state,
            PagesEvent::IdentifierChanged(String::from("ops@splus.my")),
        );
        assert_eq!(state.identifier(), "ops@splus.my");

        let _ = reduce(
            &mut state,
            PagesEvent::LoginMethodSelected(LoginMethod::Mobile),
        );

        assert_eq!(state.login_method(), LoginMethod::Mobile);
        assert_eq!(state.identifier(), "");
    }

    #[test]
    fn given_same_method_when_selected_again_then_identifier_is_kept() {
        let mut state = PagesState::default();
        state.set_identifier(String::from("admin"));

        let _ = reduce(
            &mut state,
            PagesEvent::LoginMethodSelected(LoginMethod::Email),
        );

        assert_eq!(state.identifier(), "admin");
    }

    #[test]
    fn given_filled_form_when_signing_in_then_drafts_are_cleared() {
        let mut state = PagesState::default();
        state.set_identifier(String::from("admin"));
        state.set_otp(String::from("123456"));

        let _ = reduce(&mut state, PagesEvent::SignIn);

        assert_eq!(state.identifier(), "");
        assert_eq!(state.otp(), "");
    }
}
