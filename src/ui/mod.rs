//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the task viewer:
//! - Header panel (file controls, theme toggle, filter checkbox)
//! - Task panel (the task list itself)
//! - Status bar (counts, source file, active theme, errors)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod panel_manager;
pub mod status_bar;
pub mod task_panel;
