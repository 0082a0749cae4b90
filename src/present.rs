//! Display attributes for tasks.
//!
//! Both mappings are total: an unrecognised status gets the neutral color
//! and a project reference that does not resolve to a named project falls
//! back to the raw id.

use std::fmt;

use serde::Serialize;

use crate::resolve;
use crate::store::Snapshot;
use crate::task::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Amber,
    Blue,
    Green,
    Neutral,
}

impl ColorToken {
    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Amber => "#FFA726",
            ColorToken::Blue => "#29B6F6",
            ColorToken::Green => "#66BB6A",
            ColorToken::Neutral => "#78909C",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Amber => "amber",
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn status_color(status: &TaskStatus) -> ColorToken {
    match status {
        TaskStatus::Todo => ColorToken::Amber,
        TaskStatus::InProgress => ColorToken::Blue,
        TaskStatus::Done => ColorToken::Green,
        TaskStatus::Other(_) => ColorToken::Neutral,
    }
}

/// Owning project's name, or the raw `project_id` when the reference dangles
/// or the project's name is empty.
pub fn owner_label(snapshot: &Snapshot, task: &Task) -> String {
    match resolve::project_of(snapshot, task) {
        Some(project) if !project.name.is_empty() => project.name.clone(),
        _ => task.project_id.to_string(),
    }
}

/// One task row as the renderer shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub status_label: String,
    pub color: ColorToken,
    pub color_hex: &'static str,
    pub project_id: i64,
    pub owner: String,
    /// Whether `project_id` resolves, regardless of which label was used.
    pub owner_resolved: bool,
}

pub fn task_view(snapshot: &Snapshot, task: &Task) -> TaskView {
    let color = status_color(&task.status);
    TaskView {
        id: task.id,
        title: task.title.clone(),
        status: task.status.as_str().to_string(),
        status_label: task.status.label().to_string(),
        color,
        color_hex: color.hex(),
        project_id: task.project_id,
        owner: owner_label(snapshot, task),
        owner_resolved: resolve::project_of(snapshot, task).is_some(),
    }
}

pub fn task_views(snapshot: &Snapshot, tasks: &[&Task]) -> Vec<TaskView> {
    tasks.iter().map(|task| task_view(snapshot, task)).collect()
}
