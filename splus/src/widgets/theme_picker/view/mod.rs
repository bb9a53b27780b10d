pub(crate) mod picker_popover;
