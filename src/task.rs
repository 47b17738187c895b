//! Task record model and task file I/O.
//!
//! The record is a passive schema shared with the task-list backend: no
//! validation or behavior is attached to its text fields. The legal value
//! lists the backend advertises for them are carried as constants so the
//! viewer and the sample generator agree on vocabulary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Priority values the backend accepts.
pub const PRIORITY_VALUES: &[&str] = &["Low", "Medium", "High"];

/// Status values the backend accepts.
pub const STATUS_VALUES: &[&str] = &["Pending", "In Progress", "Completed"];

/// Color values the backend accepts.
pub const COLOR_VALUES: &[&str] = &["Red", "Green", "Blue", "Yellow", "Purple"];

/// A single task as exchanged with the backend and stored in task files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task id.
    pub id: i64,
    /// Short title, always present.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-text status; the backend uses [`STATUS_VALUES`].
    pub status: String,
    /// Free-text priority; the backend uses [`PRIORITY_VALUES`].
    pub priority: String,
    /// Free-text color name; the backend uses [`COLOR_VALUES`].
    pub color: String,
    /// Searchable concatenation of title and description.
    pub full_text: String,
}

impl Task {
    /// True when the task's status marks it finished.
    pub fn is_completed(&self) -> bool {
        self.status == "Completed"
    }
}

/// Builds the searchable `full_text` field from a title and description.
pub fn full_text_of(title: &str, description: Option<&str>) -> String {
    match description {
        Some(description) if !description.is_empty() => format!("{title} {description}"),
        _ => title.to_string(),
    }
}

/// Loads a task file (a JSON array of tasks).
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task file {:?}", path))?;
    let tasks = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse task file {:?}", path))?;
    Ok(tasks)
}

/// Writes tasks to a file as a pretty-printed JSON array.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write task file {:?}", path))?;
    Ok(())
}
