pub(crate) mod dock_bar;
