//! Panel orchestration and layout management.
//!
//! Lays out the header, task list, and status bar, and funnels their
//! interactions back to the application as a single enum.

use crate::app::AppState;
use crate::ui::{header, status_bar, task_panel};

/// Result of panel interactions that need to be handled by a coordinator.
pub enum PanelInteraction {
    /// User requested to open a task file
    OpenFileRequested(std::path::PathBuf),
    /// User requested a theme toggle
    ToggleThemeRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::ToggleThemeRequested => {
                        PanelInteraction::ToggleThemeRequested
                    }
                });
            }
        });

        // Status bar at the bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Task list fills the remaining space
        egui::CentralPanel::default().show(ctx, |ui| {
            task_panel::render_task_panel(ui, state);
        });

        interaction
    }
}
