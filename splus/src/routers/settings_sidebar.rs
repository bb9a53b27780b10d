use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::settings_sidebar::{
    SettingsSidebarEffect, SettingsSidebarEvent,
};

pub(crate) fn route_event(
    app: &mut App,
    event: SettingsSidebarEvent,
) -> Task<AppEvent> {
    app.widgets
        .settings_sidebar
        .reduce(event)
        .map(AppEvent::SettingsSidebarEffect)
}

pub(crate) fn route_effect(
    app: &mut App,
    effect: SettingsSidebarEffect,
) -> Task<AppEvent> {
    match effect {
        SettingsSidebarEffect::OpenItem(path) => {
            Task::done(AppEvent::OpenItem(path))
        },
        SettingsSidebarEffect::Collapse => {
            app.nav.set_left_sidebar_collapsed(true);
            Task::none()
        },
    }
}
