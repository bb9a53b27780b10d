pub(crate) mod expander;
pub(crate) mod sidebar_panel;
