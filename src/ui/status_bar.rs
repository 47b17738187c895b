//! Status bar rendering
//!
//! Shows the loaded file, task counts, the active theme, and any pending
//! error message.

use eframe::egui;

use crate::app::AppState;

/// Renders the bottom status bar.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        if let Some(error) = &state.error_message {
            ui.colored_label(ui.visuals().error_fg_color, error);
            return;
        }

        match state.source_path() {
            Some(path) => {
                ui.label(format!("{}", path.display()));
                ui.separator();
                ui.label(format!(
                    "{} tasks, {} completed",
                    state.tasks().len(),
                    state.completed_count()
                ));
            }
            None => {
                ui.label("No task file loaded");
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("Theme: {}", state.theme.get()));
        });
    });
}
