//! Header panel UI rendering
//!
//! Handles the top bar with file controls, the theme toggle, and the
//! completed-task filter.

use eframe::egui;
use std::path::PathBuf;

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a task file to open
    OpenFileRequested(PathBuf),
    /// User clicked the theme toggle button
    ToggleThemeRequested,
}

/// Renders the application header with file controls and preferences.
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📂 Open Tasks").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Task Files", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        ui.separator();

        // The filter checkbox mutates state directly; persistence happens in
        // the app's save path.
        ui.checkbox(&mut state.show_completed, "Show completed");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.theme.get().is_dark() {
                "☀ Light mode"
            } else {
                "🌙 Dark mode"
            };
            if ui.button(label).clicked() {
                interaction = Some(HeaderInteraction::ToggleThemeRequested);
            }
        });
    });

    interaction
}
