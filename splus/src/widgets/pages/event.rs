use super::model::LoginMethod;

/// UI events emitted by page content.
#[derive(Debug, Clone)]
pub(crate) enum PagesEvent {
    LoginMethodSelected(LoginMethod),
    IdentifierChanged(String),
    OtpChanged(String),
    SignIn,
    NavigateTo(String),
}

/// Effects produced by the pages reducer.
#[derive(Debug, Clone)]
pub(crate) enum PagesEffect {
    Navigate(String),
}
