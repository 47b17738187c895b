//! Centralized application state for the task list viewer.
//!
//! State is composed of the theme preference store (the one piece of
//! session-wide reactive state), the loaded task list, and a couple of
//! persisted view preferences. Coordinators mutate it through
//! intent-revealing methods; panels read it.

use std::path::PathBuf;

use rtasks::{Task, ThemePreference, ThemeStore};

/// Main application state.
pub struct AppState {
    /// The theme preference store; single authoritative theme value.
    pub theme: ThemeStore,

    /// Tasks currently loaded into the viewer.
    tasks: Vec<Task>,

    /// Path of the loaded task file, if any.
    source_path: Option<PathBuf>,

    /// Whether completed tasks are shown. Persisted across sessions.
    pub show_completed: bool,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self::with_preferences(ThemePreference::default(), true)
    }

    /// Creates a new state with preferences loaded from storage.
    pub fn with_preferences(theme: ThemePreference, show_completed: bool) -> Self {
        Self {
            theme: ThemeStore::new(theme),
            tasks: Vec::new(),
            source_path: None,
            show_completed,
            error_message: None,
        }
    }

    // ===== Task Queries =====

    /// All loaded tasks, in file order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks passing the completed-filter, in file order.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |t| self.show_completed || !t.is_completed())
    }

    /// Number of completed tasks among those loaded.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    /// Path of the loaded task file, if any.
    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    // ===== Task Mutations =====

    /// Replaces the loaded tasks with the contents of a freshly read file.
    pub fn load_tasks(&mut self, tasks: Vec<Task>, path: PathBuf) {
        self.tasks = tasks;
        self.source_path = Some(path);
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, status: &str) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: None,
            status: status.to_string(),
            priority: "Medium".to_string(),
            color: "Blue".to_string(),
            full_text: format!("Task {id}"),
        }
    }

    #[test]
    fn test_visible_tasks_respects_filter() {
        let mut state = AppState::new();
        state.load_tasks(
            vec![task(1, "Pending"), task(2, "Completed"), task(3, "In Progress")],
            PathBuf::from("tasks.json"),
        );

        assert_eq!(state.visible_tasks().count(), 3);

        state.show_completed = false;
        let visible: Vec<i64> = state.visible_tasks().map(|t| t.id).collect();
        assert_eq!(visible, vec![1, 3]);
        assert_eq!(state.completed_count(), 1);
    }

    #[test]
    fn test_load_tasks_clears_error() {
        let mut state = AppState::new();
        state.error_message = Some("Error loading tasks: no such file".to_string());
        state.load_tasks(vec![task(1, "Pending")], PathBuf::from("tasks.json"));
        assert_eq!(state.error_message, None);
        assert!(state.source_path().is_some());
    }
}
