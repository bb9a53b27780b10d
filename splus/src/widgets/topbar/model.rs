pub(crate) const TOPBAR_HEIGHT: f32 = 56.0;
pub(crate) const BRAND_LABEL: &str = "S-Plus";
pub(crate) const USER_NAME: &str = "John Doe";
pub(crate) const USER_ROLE: &str = "Administrator";
pub(crate) const DEFAULT_UNREAD_NOTIFICATIONS: u32 = 3;
pub(crate) const SEARCH_PLACEHOLDER: &str = "Search modules, employees, sites…";

/// Read-only topbar data for rendering.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopbarViewModel<'a> {
    pub(crate) is_fullscreen: bool,
    pub(crate) unread_notifications: u32,
    pub(crate) search: &'a str,
}

/// Initials shown in the avatar bubble.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn given_full_name_when_taking_initials_then_first_letters_are_used() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials(""), "");
    }
}
