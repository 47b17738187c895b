//! Theme management and persistence coordination.
//!
//! Bridges the theme preference store to the eframe environment: initial
//! resolution at startup (persisted value, then system preference, then the
//! light default), palette application every frame, and persistence on
//! change and shutdown.

use crate::app::AppState;
use rtasks::{resolve_initial_theme, theme, ThemePreference, THEME_KEY};

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Resolves the theme to start the session with.
    ///
    /// A stored preference wins; otherwise the system dark-mode signal is
    /// consulted; otherwise light. Called once during application startup.
    pub fn load_initial_theme(storage: Option<&dyn eframe::Storage>) -> ThemePreference {
        let stored = storage.and_then(|s| s.get_string(THEME_KEY));
        resolve_initial_theme(stored.as_deref(), Self::system_prefers_dark())
    }

    /// Saves the current theme preference to persistent storage.
    ///
    /// Should be called during application shutdown or when theme changes.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: ThemePreference) {
        storage.set_string(THEME_KEY, theme.as_str().to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied. The base
    /// visuals carry the dark flag (dark visuals iff the value is dark); the
    /// palette overrides are layered on top.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let pref = state.theme.get();
        let mut visuals = if pref.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        theme::apply_palette(pref, &mut visuals);
        ctx.set_visuals(visuals);
    }

    /// Switches the store to the complementary theme.
    pub fn toggle_theme(state: &mut AppState) {
        state.theme.toggle();
    }

    /// Queries the ambient environment for a dark-mode preference.
    ///
    /// `None` when the platform reports no usable signal.
    fn system_prefers_dark() -> Option<bool> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(true),
            dark_light::Mode::Light => Some(false),
            dark_light::Mode::Default => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_stored_preference_wins_at_startup() {
        let mut storage = MockStorage::new();
        storage.data.insert(THEME_KEY.to_string(), "dark".to_string());

        let theme = ThemeCoordinator::load_initial_theme(Some(&storage));
        assert_eq!(theme, ThemePreference::Dark);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut storage = MockStorage::new();
        ThemeCoordinator::save_theme_to_storage(&mut storage, ThemePreference::Dark);
        assert_eq!(
            storage.data.get(THEME_KEY).map(String::as_str),
            Some("dark")
        );

        let theme = ThemeCoordinator::load_initial_theme(Some(&storage));
        assert_eq!(theme, ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_theme_flips_store() {
        let mut state = AppState::with_preferences(ThemePreference::Light, true);
        ThemeCoordinator::toggle_theme(&mut state);
        assert_eq!(state.theme.get(), ThemePreference::Dark);
        ThemeCoordinator::toggle_theme(&mut state);
        assert_eq!(state.theme.get(), ThemePreference::Light);
    }
}
