use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StorageError;

const CONFIG_DIR_ENV: &str = "SPLUS_CONFIG_DIR";
const APP_DIR_NAME: &str = "splus";

/// String key-value persistence used for preferences and history.
pub trait KeyValueStore {
    /// Read a value; a missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Resolve the directory holding persisted keys.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join(APP_DIR_NAME);
    }

    std::env::temp_dir().join(APP_DIR_NAME)
}

/// One file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at [`config_dir`].
    pub fn open_default() -> Self {
        Self::new(config_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        write_atomic(&self.key_path(key), value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

/// In-process store. [`MemoryStore::unavailable`] rejects every call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store behaving like disabled storage.
    pub fn unavailable() -> Self {
        Self {
            values: RefCell::default(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileStore, KeyValueStore, MemoryStore};
    use crate::errors::StorageError;

    pub(crate) fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "splus-storage-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }

    #[test]
    fn given_file_store_when_set_get_and_remove_then_values_follow() {
        let root = test_temp_dir("file_cycle");
        let store = FileStore::new(root.join("nested"));

        assert_eq!(store.get("splus_theme").expect("read succeeds"), None);

        store.set("splus_theme", "forest").expect("write succeeds");
        assert_eq!(
            store.get("splus_theme").expect("read succeeds").as_deref(),
            Some("forest")
        );
        assert!(!root.join("nested").join("splus_theme.tmp").exists());

        store.remove("splus_theme").expect("remove succeeds");
        store.remove("splus_theme").expect("second remove succeeds");
        assert_eq!(store.get("splus_theme").expect("read succeeds"), None);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_in_place_of_key_when_reading_then_io_error_is_returned()
    {
        let root = test_temp_dir("io_error");
        fs::create_dir_all(root.join("splus_theme"))
            .expect("blocking directory should be created");
        let store = FileStore::new(&root);

        assert!(matches!(store.get("splus_theme"), Err(StorageError::Io(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unavailable_memory_store_when_used_then_every_call_fails() {
        let store = MemoryStore::unavailable();
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable)));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable)));
        assert!(matches!(store.remove("k"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn given_memory_store_when_overwriting_then_last_write_wins() {
        let store = MemoryStore::new();
        store.set("k", "one").expect("write succeeds");
        store.set("k", "two").expect("write succeeds");
        assert_eq!(store.get("k").expect("read").as_deref(), Some("two"));
    }
}
