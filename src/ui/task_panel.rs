//! Task list panel rendering
//!
//! Renders the loaded tasks as a scrollable list with palette-colored
//! status, priority, and color markers.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use rtasks::theme;

/// Renders the central task list panel.
pub fn render_task_panel(ui: &mut egui::Ui, state: &AppState) {
    let colors = theme::palette(state.theme.get());

    if state.tasks().is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No tasks loaded").color(colors.text_dim).heading());
            ui.label(
                RichText::new("Open a task file or generate one with tasks-gen")
                    .color(colors.text_dim),
            );
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for task in state.visible_tasks() {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").color(theme::task_color(colors, &task.color)));

                    let mut title = RichText::new(&task.title).strong();
                    if task.is_completed() {
                        title = title.strikethrough().color(colors.text_dim);
                    }
                    ui.label(title);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(&task.priority)
                                .color(theme::priority_color(colors, &task.priority)),
                        );
                        ui.label(
                            RichText::new(&task.status)
                                .color(theme::status_color(colors, &task.status)),
                        );
                    });
                });

                if let Some(description) = &task.description {
                    ui.label(RichText::new(description).color(colors.text_dim));
                }

                ui.separator();
            }
        });
}
