//! Task file loading coordination.
//!
//! Handles the open-file workflow: reading a task file and applying the
//! result (or the failure) to application state. Task files are small enough
//! that loading stays synchronous within the frame.

use std::path::PathBuf;

use crate::app::AppState;

/// Coordinates task file workflows.
pub struct TaskCoordinator;

impl TaskCoordinator {
    /// Loads a task file into application state.
    ///
    /// On failure the previous task list is kept and the error is surfaced
    /// through `AppState::error_message`.
    pub fn open_file(state: &mut AppState, path: PathBuf) {
        match rtasks::load_tasks(&path) {
            Ok(tasks) => {
                state.load_tasks(tasks, path);
            }
            Err(e) => {
                state.error_message = Some(format!("Error loading tasks: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtasks::{save_tasks, Task};
    use std::env;
    use std::fs;

    #[test]
    fn test_open_file_loads_tasks() {
        let path = env::temp_dir().join("rtasks_coordinator_open.json");
        let tasks = vec![Task {
            id: 1,
            title: "Test the loader".to_string(),
            description: None,
            status: "Pending".to_string(),
            priority: "Low".to_string(),
            color: "Blue".to_string(),
            full_text: "Test the loader".to_string(),
        }];
        save_tasks(&path, &tasks).unwrap();

        let mut state = AppState::new();
        TaskCoordinator::open_file(&mut state, path.clone());

        assert_eq!(state.tasks(), tasks.as_slice());
        assert_eq!(state.error_message, None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_open_file_surfaces_errors_and_keeps_tasks() {
        let mut state = AppState::new();
        state.load_tasks(
            vec![Task {
                id: 1,
                title: "Existing".to_string(),
                description: None,
                status: "Pending".to_string(),
                priority: "Low".to_string(),
                color: "Red".to_string(),
                full_text: "Existing".to_string(),
            }],
            env::temp_dir().join("rtasks_existing.json"),
        );

        TaskCoordinator::open_file(&mut state, PathBuf::from("/nonexistent/tasks.json"));

        assert!(state.error_message.is_some());
        assert_eq!(state.tasks().len(), 1);
    }
}
