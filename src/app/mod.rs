//! Application-level modules for the task list viewer.
//!
//! This module contains the centralized state and the coordinators that
//! mediate between UI interactions, the theme preference store, and
//! persistent storage.

mod app_state;
mod settings_coordinator;
mod task_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use settings_coordinator::SettingsCoordinator;
pub use task_coordinator::TaskCoordinator;
pub use theme_coordinator::ThemeCoordinator;
