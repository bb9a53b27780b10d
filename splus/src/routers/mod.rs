use iced::{Task, keyboard, window};

use crate::app::{App, AppEvent};

pub(crate) mod assistant;
pub(crate) mod dock;
pub(crate) mod left_sidebar;
pub(crate) mod menu_bar;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod settings_sidebar;
pub(crate) mod theme_picker;
pub(crate) mod topbar;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => navigation::sync_location(app),
        // Topbar widget
        AppEvent::TopbarUi(event) => topbar::route_event(app, event),
        AppEvent::TopbarEffect(effect) => topbar::route_effect(app, effect),
        // Dock widget
        AppEvent::DockUi(event) => dock::route_event(app, event),
        AppEvent::DockEffect(effect) => dock::route_effect(app, effect),
        // Menu bar widget
        AppEvent::MenuBarUi(event) => menu_bar::route_event(app, event),
        AppEvent::MenuBarEffect(effect) => {
            menu_bar::route_effect(app, effect)
        },
        // Left sidebar widget
        AppEvent::LeftSidebarUi(event) => {
            left_sidebar::route_event(app, event)
        },
        AppEvent::LeftSidebarEffect(effect) => {
            left_sidebar::route_effect(app, effect)
        },
        // Settings sidebar widget
        AppEvent::SettingsSidebarUi(event) => {
            settings_sidebar::route_event(app, event)
        },
        AppEvent::SettingsSidebarEffect(effect) => {
            settings_sidebar::route_effect(app, effect)
        },
        // Assistant widget
        AppEvent::AssistantUi(event) => assistant::route_event(app, event),
        AppEvent::AssistantEffect(effect) => {
            assistant::route_effect(app, effect)
        },
        // Theme picker widget
        AppEvent::ThemePickerUi(event) => {
            theme_picker::route_event(app, event)
        },
        AppEvent::ThemePickerEffect(effect) => {
            theme_picker::route_effect(app, effect)
        },
        // Pages widget
        AppEvent::PagesUi(event) => pages::route_event(app, event),
        AppEvent::PagesEffect(effect) => pages::route_effect(effect),
        // Cross-widget navigation
        AppEvent::Navigate(path) => navigation::navigate(app, &path),
        AppEvent::OpenItem(path) => navigation::open_item(app, &path),
        AppEvent::SelectCluster(id) => navigation::select_cluster(app, &id),
        AppEvent::NavigateBack => navigation::back(app),
        AppEvent::DismissOverlays => dismiss_overlays(app),
        // Direct operations
        AppEvent::CursorMoved(position) => pointer_moved(app, position.x),
        AppEvent::PointerReleased => pointer_released(app),
        AppEvent::Keyboard(event) => route_keyboard(event),
        AppEvent::Window(window::Event::Unfocused) => pointer_released(app),
        AppEvent::Window(_) => Task::none(),
    }
}

/// Close the open dropdown and the theme picker.
pub(crate) fn dismiss_overlays(app: &mut App) -> Task<AppEvent> {
    app.nav.set_open_menu_id(None);
    if app.widgets.theme_picker.is_open() {
        theme_picker::close(app)
    } else {
        Task::none()
    }
}

fn pointer_moved(app: &mut App, x: f32) -> Task<AppEvent> {
    let mut tasks = Vec::new();
    if app.widgets.left_sidebar.is_dragging() {
        tasks.push(left_sidebar::drag_moved(app, x));
    }
    if app.widgets.assistant.is_dragging() {
        tasks.push(assistant::drag_moved(app, x));
    }
    Task::batch(tasks)
}

fn pointer_released(app: &mut App) -> Task<AppEvent> {
    let mut tasks = Vec::new();
    if app.widgets.left_sidebar.is_dragging() {
        tasks.push(left_sidebar::drag_ended(app));
    }
    if app.widgets.assistant.is_dragging() {
        tasks.push(assistant::drag_ended(app));
    }
    Task::batch(tasks)
}

fn route_keyboard(event: keyboard::Event) -> Task<AppEvent> {
    use keyboard::key::Named;

    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Task::none();
    };

    match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => {
            Task::done(AppEvent::DismissOverlays)
        },
        keyboard::Key::Named(Named::ArrowLeft) if modifiers.alt() => {
            Task::done(AppEvent::NavigateBack)
        },
        _ => Task::none(),
    }
}
