//! Preference storage backends.
//!
//! Two implementations of [`PreferenceStorage`]: an in-memory map for tests
//! and headless use, and a JSON-file store for processes that do not run
//! under eframe's own persistence (the sample generator, integration tests).
//! Missing or unreadable files are treated as empty stores rather than
//! errors, matching the capability-guard policy of the preference store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::PreferenceStorage;

/// In-memory key-value storage. Contents live only for the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// Key-value storage persisted as a single JSON object file.
///
/// Reads happen once at open time; writes accumulate in memory until
/// `flush()`. A corrupt or absent file opens as an empty store.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
    dirty: bool,
}

impl JsonFileStorage {
    /// Opens the storage file at `path`, starting empty if it is missing or
    /// unparseable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            path,
            values,
            dirty: false,
        }
    }

    /// Returns the conventional preference file location for an application,
    /// under the platform config directory. `None` when the platform exposes
    /// no config directory.
    pub fn default_path(app_name: &str) -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(app_name).join("preferences.json"))
    }

    /// The file backing this storage.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences to {:?}", self.path))?;
        Ok(())
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        match self.write_file() {
            Ok(()) => self.dirty = false,
            Err(e) => eprintln!("Warning: {e:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_string("theme"), None);

        storage.set_string("theme", "dark".to_string());
        assert_eq!(storage.get_string("theme").as_deref(), Some("dark"));

        storage.set_string("theme", "light".to_string());
        assert_eq!(storage.get_string("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_persists_across_reopen() {
        let path = env::temp_dir().join("rtasks_storage_reopen.json");
        let _ = fs::remove_file(&path);

        {
            let mut storage = JsonFileStorage::open(&path);
            storage.set_string("theme", "dark".to_string());
            storage.flush();
        }

        let storage = JsonFileStorage::open(&path);
        assert_eq!(storage.get_string("theme").as_deref(), Some("dark"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_storage_opens_empty_on_corrupt_file() {
        let path = env::temp_dir().join("rtasks_storage_corrupt.json");
        fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::open(&path);
        assert_eq!(storage.get_string("theme"), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_default_path_points_at_a_preferences_file() {
        if let Some(path) = JsonFileStorage::default_path("rtasks") {
            assert!(path.ends_with("rtasks/preferences.json"));
        }
    }

    #[test]
    fn test_flush_without_writes_touches_nothing() {
        let path = env::temp_dir().join("rtasks_storage_untouched.json");
        let _ = fs::remove_file(&path);

        let mut storage = JsonFileStorage::open(&path);
        storage.flush();
        assert!(!path.exists());
    }
}
