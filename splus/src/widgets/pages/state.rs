use super::model::LoginMethod;

/// Login form drafts. Other pages are stateless.
#[derive(Debug, Default)]
pub(super) struct PagesState {
    login_method: LoginMethod,
    identifier: String,
    otp: String,
}

impl PagesState {
    pub(super) fn login_method(&self) -> LoginMethod {
        self.login_method
    }

    pub(super) fn identifier(&self) -> &str {
        &self.identifier
    }

    pub(super) fn otp(&self) -> &str {
        &self.otp
    }

    /// Switch method and drop the identifier typed for the other one.
    pub(super) fn select_login_method(&mut self, method: LoginMethod) {
        if self.login_method != method {
            self.login_method = method;
            self.identifier.clear();
        }
    }

    pub(super) fn set_identifier(&mut self, value: String) {
        self.identifier = value;
    }

    pub(super) fn set_otp(&mut self, value: String) {
        self.otp = value;
    }

    pub(super) fn clear_login(&mut self) {
        self.identifier.clear();
        self.otp.clear();
    }
}
