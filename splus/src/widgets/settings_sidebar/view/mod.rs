pub(crate) mod settings_list;
