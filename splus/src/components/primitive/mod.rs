pub(crate) mod data_table;
pub(crate) mod nav_glyph;
pub(crate) mod page_header;
pub(crate) mod resize_handle;
pub(crate) mod stat_card;
