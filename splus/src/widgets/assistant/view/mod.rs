pub(crate) mod chat_panel;
