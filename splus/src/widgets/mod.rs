pub(crate) mod assistant;
pub(crate) mod dock;
pub(crate) mod left_sidebar;
pub(crate) mod menu_bar;
pub(crate) mod pages;
pub(crate) mod settings_sidebar;
pub(crate) mod theme_picker;
pub(crate) mod topbar;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) topbar: topbar::TopbarWidget,
    pub(crate) dock: dock::DockWidget,
    pub(crate) menu_bar: menu_bar::MenuBarWidget,
    pub(crate) left_sidebar: left_sidebar::LeftSidebarWidget,
    pub(crate) settings_sidebar: settings_sidebar::SettingsSidebarWidget,
    pub(crate) assistant: assistant::AssistantWidget,
    pub(crate) theme_picker: theme_picker::ThemePickerWidget,
    pub(crate) pages: pages::PagesWidget,
}

impl Widgets {
    pub(crate) fn new() -> Self {
        Self {
            topbar: topbar::TopbarWidget::new(),
            dock: dock::DockWidget::new(),
            menu_bar: menu_bar::MenuBarWidget::new(),
            left_sidebar: left_sidebar::LeftSidebarWidget::new(),
            settings_sidebar: settings_sidebar::SettingsSidebarWidget::new(),
            assistant: assistant::AssistantWidget::new(),
            theme_picker: theme_picker::ThemePickerWidget::new(),
            pages: pages::PagesWidget::new(),
        }
    }
}
