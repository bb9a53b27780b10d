pub(crate) const HOME_PATH: &str = "/";
pub(crate) const LOGIN_PATH: &str = "/login";

const MAX_HISTORY: usize = 50;

/// Current location plus the back stack.
#[derive(Debug, Clone)]
pub(crate) struct Router {
    path: String,
    history: Vec<String>,
}

impl Router {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            history: Vec::new(),
        }
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Move to `path`. Returns `false` when it is already current.
    pub(crate) fn navigate(&mut self, path: &str) -> bool {
        if self.path == path {
            return false;
        }

        let previous = std::mem::replace(&mut self.path, path.to_string());
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        true
    }

    /// Pop the back stack. Returns `false` when there is nothing to go to.
    pub(crate) fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.path = previous;
                true
            },
            None => false,
        }
    }
}

/// Routing state.
#[derive(Debug, Clone)]
pub(crate) struct State {
    pub(crate) router: Router,
}

impl State {
    pub(crate) fn new() -> Self {
        Self {
            router: Router::new(HOME_PATH),
        }
    }

    pub(crate) fn path(&self) -> &str {
        self.router.path()
    }
}

#[cfg(test)]
mod tests {
    use super::Router;

    #[test]
    fn given_new_path_when_navigating_then_previous_path_is_pushed() {
        let mut router = Router::new("/");
        assert!(router.navigate("/employee/all"));
        assert_eq!(router.path(), "/employee/all");
        assert!(router.can_go_back());

        assert!(router.back());
        assert_eq!(router.path(), "/");
        assert!(!router.can_go_back());
    }

    #[test]
    fn given_current_path_when_navigating_then_nothing_changes() {
        let mut router = Router::new("/billing/dashboard");
        assert!(!router.navigate("/billing/dashboard"));
        assert!(!router.can_go_back());
    }

    #[test]
    fn given_empty_history_when_going_back_then_path_is_kept() {
        let mut router = Router::new("/");
        assert!(!router.back());
        assert_eq!(router.path(), "/");
    }

    #[test]
    fn given_long_session_when_navigating_then_history_is_bounded() {
        let mut router = Router::new("/");
        for index in 0..80 {
            router.navigate(&format!("/module/{index}"));
        }

        let mut steps = 0;
        while router.back() {
            steps += 1;
        }
        assert_eq!(steps, 50);
    }
}
