//! Theme choice persistence.
//!
//! Reads fall back to defaults. Write failures are logged and dropped.

use crate::errors::StorageError;
use crate::storage::KeyValueStore;
use crate::theme::{
    CUSTOM_THEME_ID, DEFAULT_THEME_ID, Theme, default_theme, find_theme,
};

pub const THEME_KEY: &str = "splus_theme";
pub const CUSTOM_THEME_KEY: &str = "splus_custom_theme";

/// Saved preset id, or the default id when nothing usable is stored.
pub fn load_saved_theme_id(store: &dyn KeyValueStore) -> String {
    match store.get(THEME_KEY) {
        Ok(Some(id)) if !id.trim().is_empty() => id.trim().to_string(),
        Ok(_) => DEFAULT_THEME_ID.to_string(),
        Err(err) => {
            log::warn!("failed to read saved theme id, using default: {err}");
            DEFAULT_THEME_ID.to_string()
        },
    }
}

pub fn save_theme_id(store: &dyn KeyValueStore, id: &str) {
    if let Err(err) = store.set(THEME_KEY, id) {
        log::warn!("failed to save theme id `{id}`: {err}");
    }
}

pub fn clear_saved_theme(store: &dyn KeyValueStore) {
    if let Err(err) = store.remove(THEME_KEY) {
        log::warn!("failed to clear saved theme id: {err}");
    }
}

pub fn save_custom_theme(store: &dyn KeyValueStore, theme: &Theme) {
    let result = serde_json::to_string(theme)
        .map_err(StorageError::from)
        .and_then(|payload| store.set(CUSTOM_THEME_KEY, &payload));
    if let Err(err) = result {
        log::warn!("failed to save custom theme: {err}");
    }
}

/// Saved custom theme record, if one exists and parses.
pub fn load_custom_theme(store: &dyn KeyValueStore) -> Option<Theme> {
    match read_custom_theme(store) {
        Ok(theme) => theme,
        Err(err) => {
            log::warn!("failed to load custom theme: {err}");
            None
        },
    }
}

fn read_custom_theme(
    store: &dyn KeyValueStore,
) -> Result<Option<Theme>, StorageError> {
    let Some(raw) = store.get(CUSTOM_THEME_KEY)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Theme to apply at startup.
///
/// A saved `custom` id uses the stored record when it loads; otherwise the
/// saved preset is used, falling back to the first preset.
pub fn resolve_boot_theme(store: &dyn KeyValueStore) -> Theme {
    let id = load_saved_theme_id(store);

    if id == CUSTOM_THEME_ID {
        if let Some(theme) = load_custom_theme(store) {
            log::info!("restoring custom theme");
            return theme;
        }
    }

    match find_theme(&id) {
        Some(theme) => {
            log::info!("restoring theme `{id}`");
            theme.clone()
        },
        None => default_theme().clone(),
    }
}
