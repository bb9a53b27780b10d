#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Point, Subscription, Task, Theme, keyboard, window};
use splus_nav::preferences::resolve_boot_theme;
use splus_nav::storage::{FileStore, KeyValueStore};
use splus_nav::{NavigationState, Taxonomy};

use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::assistant::{AssistantEffect, AssistantEvent};
use crate::widgets::dock::{DockEffect, DockEvent};
use crate::widgets::left_sidebar::{LeftSidebarEffect, LeftSidebarEvent};
use crate::widgets::menu_bar::{MenuBarEffect, MenuBarEvent};
use crate::widgets::pages::{PagesEffect, PagesEvent};
use crate::widgets::settings_sidebar::{
    SettingsSidebarEffect, SettingsSidebarEvent,
};
use crate::widgets::theme_picker::{ThemePickerEffect, ThemePickerEvent};
use crate::widgets::topbar::{TopbarEffect, TopbarEvent};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Topbar widget
    TopbarUi(TopbarEvent),
    TopbarEffect(TopbarEffect),
    // Dock widget
    DockUi(DockEvent),
    DockEffect(DockEffect),
    // Menu bar widget
    MenuBarUi(MenuBarEvent),
    MenuBarEffect(MenuBarEffect),
    // Left sidebar widget
    LeftSidebarUi(LeftSidebarEvent),
    LeftSidebarEffect(LeftSidebarEffect),
    // Settings sidebar widget
    SettingsSidebarUi(SettingsSidebarEvent),
    SettingsSidebarEffect(SettingsSidebarEffect),
    // Assistant widget
    AssistantUi(AssistantEvent),
    AssistantEffect(AssistantEffect),
    // Theme picker widget
    ThemePickerUi(ThemePickerEvent),
    ThemePickerEffect(ThemePickerEffect),
    // Pages widget
    PagesUi(PagesEvent),
    PagesEffect(PagesEffect),
    // Cross-widget navigation
    Navigate(String),
    OpenItem(String),
    SelectCluster(String),
    NavigateBack,
    DismissOverlays,
    // Direct operations
    CursorMoved(Point),
    PointerReleased,
    Keyboard(keyboard::Event),
    Window(window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) taxonomy: Taxonomy,
    pub(crate) nav: NavigationState,
    pub(crate) store: Box<dyn KeyValueStore>,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let store = FileStore::open_default();
        log::info!("preferences stored in {}", store.root().display());
        Self::with_store(Box::new(store))
    }

    /// Initialize against an explicit preference store.
    pub(crate) fn with_store(
        store: Box<dyn KeyValueStore>,
    ) -> (Self, Task<AppEvent>) {
        let taxonomy = Taxonomy::load().unwrap_or_else(|err| {
            log::warn!("navigation table rejected, using it unchecked: {err}");
            Taxonomy::builtin()
        });
        let theme_manager = ThemeManager::new(resolve_boot_theme(&*store));

        let app = App {
            taxonomy,
            nav: NavigationState::default(),
            store,
            theme_manager,
            state: State::new(),
            widgets: Widgets::new(),
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title for the current location.
    pub(crate) fn title(&self) -> String {
        self.taxonomy.page_title(self.state.path())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Whether a panel resize drag is in flight.
    pub(crate) fn is_resizing(&self) -> bool {
        self.widgets.left_sidebar.is_dragging()
            || self.widgets.assistant.is_dragging()
    }

    /// Whether a dropdown or the theme picker is showing.
    pub(crate) fn has_open_overlay(&self) -> bool {
        self.nav.open_menu_id().is_some()
            || self.widgets.theme_picker.is_open()
    }
}
