//! Generic settings persistence coordination.
//!
//! Type-safe loading and saving of serializable view preferences (currently
//! the completed-task filter) through eframe's persistent storage. Settings
//! are stored as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Returns the deserialized value if found and valid, otherwise the
    /// provided default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage as a JSON string.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}
