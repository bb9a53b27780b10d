use iced::widget::{Row, Space, Stack, column, container, mouse_area};
use iced::{Element, Length, Padding, Theme, alignment, mouse};
use splus_nav::Cluster;
use splus_nav::taxonomy::SETTINGS_CLUSTER_ID;

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::assistant::view::chat_panel::{self, ChatPanelProps};
use crate::widgets::dock::model::DOCK_BOTTOM_MARGIN;
use crate::widgets::dock::view::dock_bar::{self, DockBarProps};
use crate::widgets::left_sidebar::view::expander::{self, ExpanderProps};
use crate::widgets::left_sidebar::view::sidebar_panel::{
    self, SidebarPanelProps,
};
use crate::widgets::menu_bar::model::open_section;
use crate::widgets::menu_bar::view::dropdown::{self, DropdownProps};
use crate::widgets::menu_bar::view::menu_strip::{self, MenuStripProps};
use crate::widgets::pages::model::{PageKind, page_for};
use crate::widgets::pages::view::{
    analytics, billing, dashboard, employees, login, module_page, not_found,
    projects, settings_grid,
};
use crate::widgets::settings_sidebar::view::settings_list::{
    self, SettingsListProps,
};
use crate::widgets::theme_picker::ThemePickerEvent;
use crate::widgets::theme_picker::model::{
    POPOVER_RIGHT_OFFSET, POPOVER_TOP_OFFSET,
};
use crate::widgets::theme_picker::view::picker_popover::{
    self, PickerPopoverProps,
};
use crate::widgets::topbar::view::header_bar::{self, HeaderBarProps};

type AppElement<'a> = Element<'a, AppEvent, Theme, iced::Renderer>;

/// Render the root application view.
pub(super) fn view(app: &App) -> AppElement<'_> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let location = app.state.path();
    let page = page_for(&app.taxonomy, location);

    if page == PageKind::Login {
        return view_page(app, page, theme_props);
    }

    let header = header_bar::view(HeaderBarProps {
        vm: app.widgets.topbar.vm(),
        assistant_open: app.nav.ai_panel_open(),
        picker_open: app.widgets.theme_picker.is_open(),
        theme: theme_props,
    })
    .map(AppEvent::TopbarUi);

    let active_cluster = app
        .taxonomy
        .cluster(app.nav.active_cluster_id())
        .or_else(|| app.taxonomy.clusters().first());

    let mut body = Row::new().width(Length::Fill).height(Length::Fill);
    if let Some(cluster) = active_cluster {
        body = body.push(view_left_panel(app, cluster, theme_props));
    }
    body = body.push(view_workspace(app, active_cluster, page, theme_props));
    if app.nav.ai_panel_open() {
        body = body.push(
            chat_panel::view(ChatPanelProps {
                vm: app.widgets.assistant.vm(),
                width: app.nav.right_sidebar_width(),
                theme: theme_props,
            })
            .map(AppEvent::AssistantUi),
        );
    }

    let mut layers: Vec<AppElement<'_>> = vec![
        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        view_dock(app, theme_props),
    ];

    if app.widgets.theme_picker.is_open() {
        layers.push(view_picker_overlay(app, theme_props));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the collapsed expander, the settings list or the cluster sidebar.
fn view_left_panel<'a>(
    app: &'a App,
    cluster: &'static Cluster,
    theme_props: ThemeProps<'a>,
) -> AppElement<'a> {
    if app.nav.left_sidebar_collapsed() {
        return expander::view(ExpanderProps { theme: theme_props })
            .map(AppEvent::LeftSidebarUi);
    }

    if cluster.id == SETTINGS_CLUSTER_ID {
        return settings_list::view(SettingsListProps {
            vm: app.widgets.settings_sidebar.vm(),
            cluster,
            location: app.state.path(),
            width: app.nav.left_sidebar_width(),
            theme: theme_props,
        })
        .map(AppEvent::SettingsSidebarUi);
    }

    sidebar_panel::view(SidebarPanelProps {
        vm: app.widgets.left_sidebar.vm(),
        cluster,
        clusters: app.taxonomy.clusters(),
        location: app.state.path(),
        width: app.nav.left_sidebar_width(),
        theme: theme_props,
    })
    .map(AppEvent::LeftSidebarUi)
}

/// Render the menu strip above the page, with the open dropdown layered
/// over the page.
fn view_workspace<'a>(
    app: &'a App,
    cluster: Option<&'static Cluster>,
    page: PageKind,
    theme_props: ThemeProps<'a>,
) -> AppElement<'a> {
    let location = app.state.path();
    let palette = theme_props.theme.iced_palette();
    let canvas = palette.canvas;

    let content = container(view_page(app, page, theme_props))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(canvas.into()),
            ..Default::default()
        });

    let mut page_area = mouse_area(content);
    if app.has_open_overlay() {
        page_area = page_area.on_press(AppEvent::DismissOverlays);
    }

    let mut layers: Vec<AppElement<'a>> = vec![page_area.into()];
    let mut workspace = column![].width(Length::Fill).height(Length::Fill);

    if let Some(cluster) = cluster {
        workspace = workspace.push(
            menu_strip::view(MenuStripProps {
                cluster,
                open_menu_id: app.nav.open_menu_id(),
                location,
                theme: theme_props,
            })
            .map(AppEvent::MenuBarUi),
        );

        if let Some((index, section)) =
            open_section(cluster, app.nav.open_menu_id())
        {
            layers.push(
                dropdown::view(DropdownProps {
                    vm: app.widgets.menu_bar.vm(),
                    cluster,
                    section,
                    index,
                    location,
                    theme: theme_props,
                })
                .map(AppEvent::MenuBarUi),
            );
        }
    }

    workspace
        .push(
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_page<'a>(
    app: &'a App,
    page: PageKind,
    theme_props: ThemeProps<'a>,
) -> AppElement<'a> {
    let theme = theme_props;
    let content = match page {
        PageKind::Dashboard => {
            dashboard::view(dashboard::DashboardProps { theme })
        },
        PageKind::Employees => {
            employees::view(employees::EmployeesProps { theme })
        },
        PageKind::Projects => projects::view(projects::ProjectsProps { theme }),
        PageKind::Billing => billing::view(billing::BillingProps { theme }),
        PageKind::Analytics => {
            analytics::view(analytics::AnalyticsProps { theme })
        },
        PageKind::Settings(resolved) => {
            settings_grid::view(settings_grid::SettingsGridProps {
                resolved,
                theme,
            })
        },
        PageKind::Module(resolved) => {
            module_page::view(module_page::ModulePageProps { resolved, theme })
        },
        PageKind::Login => login::view(login::LoginProps {
            vm: app.widgets.pages.vm(),
            theme,
        }),
        PageKind::NotFound => not_found::view(not_found::NotFoundProps {
            location: app.state.path(),
            theme,
        }),
    };

    content.map(AppEvent::PagesUi)
}

/// Float the dock above the bottom edge, centered.
fn view_dock<'a>(app: &'a App, theme_props: ThemeProps<'a>) -> AppElement<'a> {
    let dock = dock_bar::view(DockBarProps {
        vm: app.widgets.dock.vm(),
        clusters: app.taxonomy.clusters(),
        active_cluster_id: app.nav.active_cluster_id(),
        magnification: app.nav.dock_magnification(),
        theme: theme_props,
    })
    .map(AppEvent::DockUi);

    container(dock)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            bottom: DOCK_BOTTOM_MARGIN,
            ..Padding::ZERO
        })
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

/// Backdrop that closes the picker on outside press, plus the popover.
fn view_picker_overlay<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> AppElement<'a> {
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(AppEvent::ThemePickerUi(ThemePickerEvent::Close))
    .interaction(mouse::Interaction::Idle);

    let popover = picker_popover::view(PickerPopoverProps {
        vm: app.widgets.theme_picker.vm(),
        active: app.theme_manager.current().source(),
        theme: theme_props,
    })
    .map(AppEvent::ThemePickerUi);

    let anchored = container(popover)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: POPOVER_TOP_OFFSET,
            right: POPOVER_RIGHT_OFFSET,
            ..Padding::ZERO
        })
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    Stack::with_children(vec![backdrop.into(), anchored.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
