//! Task list viewer GUI application
//!
//! A small egui viewer for task files with a persisted light/dark theme
//! preference. The theme starts from the stored preference, falls back to
//! the system color-scheme signal, and defaults to light; toggling it takes
//! effect immediately and survives restarts.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod ui;

use app::{AppState, SettingsCoordinator, TaskCoordinator, ThemeCoordinator};
use rtasks::THEME_KEY;
use ui::panel_manager::{PanelInteraction, PanelManager};

const SHOW_COMPLETED_KEY: &str = "show_completed";

/// Main application entry point that initializes and launches the task viewer.
fn main() -> eframe::Result {
    // Parse command-line arguments to check for an initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("TaskList 3000"),
        ..Default::default()
    };

    eframe::run_native(
        "TaskList 3000",
        options,
        Box::new(move |cc| Ok(Box::new(TaskViewerApp::new(cc, initial_file)))),
    )
}

/// The task list viewer application.
///
/// Delegates to coordinators:
/// - `ThemeCoordinator` handles theme resolution, application, and persistence
/// - `TaskCoordinator` handles task file loading
/// - `PanelManager` handles UI panel layout and rendering
struct TaskViewerApp {
    /// Centralized application state
    state: AppState,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl Default for TaskViewerApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            pending_file_load: None,
        }
    }
}

impl TaskViewerApp {
    /// Creates a new viewer instance with preferences loaded from persistent
    /// storage. Optionally accepts an initial task file to load on startup.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme = ThemeCoordinator::load_initial_theme(cc.storage);
        let show_completed =
            SettingsCoordinator::load_setting_or(cc.storage, SHOW_COMPLETED_KEY, true);

        Self {
            state: AppState::with_preferences(theme, show_completed),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to coordinators.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                TaskCoordinator::open_file(&mut self.state, path);
            }
            PanelInteraction::ToggleThemeRequested => {
                ThemeCoordinator::toggle_theme(&mut self.state);
            }
        }
    }
}

impl eframe::App for TaskViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.get());
        SettingsCoordinator::save_setting(storage, SHOW_COMPLETED_KEY, &self.state.show_completed);
    }

    /// Main update loop that renders all UI panels and handles state.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Apply current theme
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            storage.set_string(THEME_KEY, self.state.theme.get().as_str().to_string());
            SettingsCoordinator::save_setting(
                storage,
                SHOW_COMPLETED_KEY,
                &self.state.show_completed,
            );
        }

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            TaskCoordinator::open_file(&mut self.state, path);
        }

        // Render all panels and get interaction result
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
