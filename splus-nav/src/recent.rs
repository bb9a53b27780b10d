use crate::errors::StorageError;
use crate::storage::KeyValueStore;

pub const RECENT_NAV_KEY: &str = "splus_recent_nav";
pub const MAX_RECENT: usize = 8;

/// Put `path` at the head of `list`, dropping older copies and overflow.
pub fn push_recent(list: &[String], path: &str) -> Vec<String> {
    std::iter::once(path.to_string())
        .chain(list.iter().filter(|entry| *entry != path).cloned())
        .take(MAX_RECENT)
        .collect()
}

/// Recently visited paths, most recent first. Failures read as empty.
pub fn load_recent(store: &dyn KeyValueStore) -> Vec<String> {
    match read_recent(store) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("failed to read recent navigation: {err}");
            Vec::new()
        },
    }
}

/// Remember a visit. The root path and empty paths are ignored.
pub fn record_visit(store: &dyn KeyValueStore, path: &str) {
    if path.is_empty() || path == "/" {
        return;
    }

    let result = read_recent(store).and_then(|list| {
        let next = push_recent(&list, path);
        let payload = serde_json::to_string(&next)?;
        store.set(RECENT_NAV_KEY, &payload)
    });

    if let Err(err) = result {
        log::warn!("failed to record visit to `{path}`: {err}");
    }
}

fn read_recent(store: &dyn KeyValueStore) -> Result<Vec<String>, StorageError> {
    let Some(raw) = store.get(RECENT_NAV_KEY)? else {
        return Ok(Vec::new());
    };
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn given_same_path_twice_when_recording_then_list_holds_it_once() {
        let store = MemoryStore::new();
        record_visit(&store, "/leave/new");
        record_visit(&store, "/leave/new");
        assert_eq!(load_recent(&store), vec![String::from("/leave/new")]);
    }

    #[test]
    fn given_nine_distinct_paths_when_recording_then_eight_most_recent_remain()
    {
        let store = MemoryStore::new();
        for index in 1..=9 {
            record_visit(&store, &format!("/module/{index}"));
        }

        let expected: Vec<String> =
            (2..=9).rev().map(|index| format!("/module/{index}")).collect();
        assert_eq!(load_recent(&store), expected);
    }

    #[test]
    fn given_revisited_path_when_recording_then_it_moves_to_the_front() {
        let store = MemoryStore::new();
        record_visit(&store, "/a");
        record_visit(&store, "/b");
        record_visit(&store, "/a");
        assert_eq!(
            load_recent(&store),
            vec![String::from("/a"), String::from("/b")]
        );
    }

    #[test]
    fn given_root_or_empty_path_when_recording_then_nothing_is_stored() {
        let store = MemoryStore::new();
        record_visit(&store, "/");
        record_visit(&store, "");
        assert!(load_recent(&store).is_empty());
        assert_eq!(store.get(RECENT_NAV_KEY).expect("read succeeds"), None);
    }

    #[test]
    fn given_corrupt_history_when_loading_then_empty_list_is_returned() {
        let store = MemoryStore::new();
        store
            .set(RECENT_NAV_KEY, "[1, 2")
            .expect("memory write succeeds");
        assert!(load_recent(&store).is_empty());
    }

    #[test]
    fn given_unavailable_store_when_recording_then_visit_is_silently_dropped() {
        let store = MemoryStore::unavailable();
        record_visit(&store, "/leave/new");
        assert!(load_recent(&store).is_empty());
    }
}
