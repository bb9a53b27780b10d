use iced::Task;
use splus_nav::recent::record_visit;

use super::left_sidebar;
use crate::app::{App, AppEvent};
use crate::widgets::left_sidebar::LeftSidebarEvent;

/// Move to `path` and bring every surface in line with it.
pub(crate) fn navigate(app: &mut App, path: &str) -> Task<AppEvent> {
    if !app.state.router.navigate(path) {
        return Task::none();
    }

    log::debug!("navigated to `{path}`");
    sync_location(app)
}

/// Open a menu item: remember the visit, then navigate.
pub(crate) fn open_item(app: &mut App, path: &str) -> Task<AppEvent> {
    record_visit(app.store.as_ref(), path);
    app.nav.set_open_menu_id(None);
    navigate(app, path)
}

/// Make `cluster_id` active and land on its first item.
pub(crate) fn select_cluster(
    app: &mut App,
    cluster_id: &str,
) -> Task<AppEvent> {
    app.nav.set_open_menu_id(None);
    app.nav.set_active_cluster(cluster_id);

    match app.taxonomy.first_item(cluster_id) {
        Some(item) => navigate(app, item.path),
        None => {
            log::warn!("cluster `{cluster_id}` has no landing item");
            Task::none()
        },
    }
}

pub(crate) fn back(app: &mut App) -> Task<AppEvent> {
    if !app.state.router.can_go_back() {
        log::debug!("back requested with empty history");
        return Task::none();
    }
    app.state.router.back();

    log::debug!("navigated back to `{}`", app.state.path());
    sync_location(app)
}

/// Close the dropdown and follow the location with the active cluster and
/// the expanded sidebar section.
pub(crate) fn sync_location(app: &mut App) -> Task<AppEvent> {
    app.nav.set_open_menu_id(None);

    let resolved = app.taxonomy.find_section(app.state.path());
    if let Some(resolved) = resolved {
        app.nav.set_active_cluster(resolved.cluster.id);
    }

    let section_id = resolved.map(|resolved| resolved.section.id.to_string());
    left_sidebar::route_event(
        app,
        LeftSidebarEvent::LocationChanged { section_id },
    )
}

#[cfg(test)]
mod tests {
    use splus_nav::recent::load_recent;
    use splus_nav::storage::MemoryStore;

    use super::{back, navigate, open_item, select_cluster};
    use crate::app::App;

    fn app() -> App {
        let (app, _) = App::with_store(Box::new(MemoryStore::new()));
        app
    }

    #[test]
    fn given_item_path_when_navigating_then_owning_cluster_becomes_active() {
        let mut app = app();

        let _ = navigate(&mut app, "/leave/new");

        assert_eq!(app.state.path(), "/leave/new");
        assert_eq!(app.nav.active_cluster_id(), "attendance");
    }

    #[test]
    fn given_open_menu_when_opening_item_then_menu_closes_and_visit_is_recorded()
     {
        let mut app = app();
        app.nav.toggle_menu("billing");

        let _ = open_item(&mut app, "/billing/invoice/new");

        assert_eq!(app.nav.open_menu_id(), None);
        assert_eq!(app.state.path(), "/billing/invoice/new");
        assert_eq!(
            load_recent(app.store.as_ref()),
            vec![String::from("/billing/invoice/new")]
        );
    }

    #[test]
    fn given_cluster_when_selected_then_first_item_is_opened() {
        let mut app = app();

        let _ = select_cluster(&mut app, "billing-acc");

        assert_eq!(app.nav.active_cluster_id(), "billing-acc");
        assert_eq!(app.state.path(), "/billing/dashboard");
    }

    #[test]
    fn given_unknown_cluster_when_selected_then_location_is_unchanged() {
        let mut app = app();

        let _ = select_cluster(&mut app, "nowhere");

        assert_eq!(app.state.path(), "/");
    }

    #[test]
    fn given_history_when_going_back_then_previous_location_is_restored() {
        let mut app = app();
        let _ = navigate(&mut app, "/patrol/all");

        let _ = back(&mut app);

        assert_eq!(app.state.path(), "/");
        assert_eq!(app.nav.active_cluster_id(), "home");
    }
}
