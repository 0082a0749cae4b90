//! Task records and task status.
//!
//! Status is not validated when tasks are loaded. Values outside the three
//! known states are kept verbatim in [`TaskStatus::Other`] so they survive a
//! load/save cycle and still get a defined presentation.

use std::fmt;

use serde::{Deserialize, Serialize};

const STATUS_TODO: &str = "TODO";
const STATUS_IN_PROGRESS: &str = "IN_PROGRESS";
const STATUS_DONE: &str = "DONE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    /// Any status text the board does not recognise.
    Other(String),
}

impl TaskStatus {
    /// The recognised statuses, in board order.
    pub const KNOWN: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Parse wire text. Matching is exact; anything else becomes `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            STATUS_TODO => TaskStatus::Todo,
            STATUS_IN_PROGRESS => TaskStatus::InProgress,
            STATUS_DONE => TaskStatus::Done,
            other => TaskStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => STATUS_TODO,
            TaskStatus::InProgress => STATUS_IN_PROGRESS,
            TaskStatus::Done => STATUS_DONE,
            TaskStatus::Other(value) => value.as_str(),
        }
    }

    /// Display name shown in listings. Unknown statuses show their raw text.
    pub fn label(&self) -> &str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
            TaskStatus::Other(value) => value.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Other(_))
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            STATUS_TODO | STATUS_IN_PROGRESS | STATUS_DONE => TaskStatus::parse(&value),
            _ => TaskStatus::Other(value),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        TaskStatus::parse(value)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>, status: TaskStatus, project_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            status,
            project_id,
            description: None,
        }
    }
}
