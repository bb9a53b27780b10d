pub(crate) mod style;
pub(crate) mod theme;
