use crate::taxonomy::{Cluster, Item, Section, Taxonomy};

const APP_TITLE: &str = "Splus";

/// Owning entities of a resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub cluster: &'static Cluster,
    pub section: &'static Section,
    pub item: &'static Item,
}

/// Return whether `location` falls under `item_path`.
///
/// A location matches on equality, or when it continues the item path past
/// a `/` boundary. The root path only ever matches itself.
pub fn matches_path(item_path: &str, location: &str) -> bool {
    if item_path == location {
        return true;
    }
    if item_path == "/" {
        return false;
    }

    location
        .strip_prefix(item_path)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Return whether any item of `section` owns `location`.
pub fn section_contains(section: &Section, location: &str) -> bool {
    section
        .items
        .iter()
        .any(|item| matches_path(item.path, location))
}

impl Taxonomy {
    /// Find the first cluster owning `location`.
    pub fn find_cluster(&self, location: &str) -> Option<&'static Cluster> {
        self.clusters().iter().find(|cluster| {
            cluster
                .sections
                .iter()
                .any(|section| section_contains(section, location))
        })
    }

    /// Find the first `(cluster, section, item)` owning `location`.
    pub fn find_section(&self, location: &str) -> Option<Resolved> {
        self.items()
            .find(|(_, _, item)| matches_path(item.path, location))
            .map(|(cluster, section, item)| Resolved {
                cluster,
                section,
                item,
            })
    }

    /// Landing item of a cluster: the first item of its first section.
    pub fn first_item(&self, cluster_id: &str) -> Option<&'static Item> {
        self.cluster(cluster_id)?
            .sections
            .first()?
            .items
            .first()
    }

    /// Item whose path equals `location` exactly.
    pub fn exact_item(&self, location: &str) -> Option<&'static Item> {
        self.items()
            .map(|(_, _, item)| item)
            .find(|item| item.path == location)
    }

    /// Window title for a location.
    pub fn page_title(&self, location: &str) -> String {
        match self.exact_item(location) {
            Some(item) => format!("{} - {APP_TITLE}", item.label),
            None => String::from(APP_TITLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        Taxonomy::load().expect("built-in table is valid")
    }

    #[test]
    fn given_every_item_when_resolving_its_path_then_the_same_item_is_returned()
    {
        let taxonomy = taxonomy();
        for (cluster, section, item) in taxonomy.items() {
            let resolved = taxonomy
                .find_section(item.path)
                .unwrap_or_else(|| panic!("{} did not resolve", item.path));
            assert_eq!(resolved.item, item);
            assert_eq!(resolved.section, section);
            assert_eq!(resolved.cluster, cluster);
            assert_eq!(
                taxonomy.find_cluster(item.path).map(|c| c.id),
                Some(cluster.id)
            );
        }
    }

    #[test]
    fn given_nested_location_when_resolving_then_owning_item_is_returned() {
        let taxonomy = taxonomy();
        for (_, _, item) in taxonomy.items().filter(|(_, _, i)| i.path != "/") {
            let nested = format!("{}/123/edit", item.path);
            let resolved = taxonomy
                .find_section(&nested)
                .unwrap_or_else(|| panic!("{nested} did not resolve"));
            assert_eq!(resolved.item.path, item.path);
        }
    }

    #[test]
    fn given_employee_record_path_when_resolving_then_all_employee_item_owns_it()
     {
        let resolved = taxonomy()
            .find_section("/employee/all/123")
            .expect("nested employee path resolves");
        assert_eq!(resolved.item.id, "all-employee");
        assert_eq!(resolved.section.id, "employees-main");
        assert_eq!(resolved.cluster.id, "employees");
    }

    #[test]
    fn given_unknown_location_when_resolving_then_nothing_is_found() {
        let taxonomy = taxonomy();
        for location in ["/nonexistent", "/login", "/employee/allx"] {
            assert!(taxonomy.find_section(location).is_none(), "{location}");
            assert!(taxonomy.find_cluster(location).is_none(), "{location}");
        }
    }

    #[test]
    fn given_sibling_prefix_when_matching_then_boundary_is_respected() {
        assert!(matches_path("/settings", "/settings"));
        assert!(matches_path("/settings", "/settings/leave"));
        assert!(!matches_path("/settings", "/settings-other"));
        assert!(!matches_path("/", "/anything"));
        assert!(matches_path("/", "/"));
    }

    #[test]
    fn given_cluster_id_when_asking_for_landing_item_then_first_item_is_returned()
    {
        let taxonomy = taxonomy();
        assert_eq!(taxonomy.first_item("home").map(|i| i.path), Some("/"));
        assert_eq!(
            taxonomy.first_item("billing-acc").map(|i| i.path),
            Some("/billing/dashboard")
        );
        assert_eq!(
            taxonomy.first_item("system").map(|i| i.path),
            Some("/settings/company")
        );
        assert!(taxonomy.first_item("missing").is_none());
    }

    #[test]
    fn given_locations_when_building_titles_then_only_exact_matches_are_labelled()
    {
        let taxonomy = taxonomy();
        assert_eq!(taxonomy.page_title("/"), "Dashboard - Splus");
        assert_eq!(taxonomy.page_title("/leave/new"), "New Leave - Splus");
        assert_eq!(taxonomy.page_title("/leave/new/1"), "Splus");
        assert_eq!(taxonomy.page_title("/login"), "Splus");
    }
}
