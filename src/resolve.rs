//! Relationship lookups between tasks and projects.
//!
//! Lookups never fail. A task whose `project_id` matches no project resolves
//! to `None`; callers decide the fallback. When ids are duplicated the first
//! match in store order wins.

use crate::project::Project;
use crate::store::Snapshot;
use crate::task::{Task, TaskStatus};

/// Optional task filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub project_id: Option<i64>,
    pub status: Option<TaskStatus>,
    /// Free-text query over title and description.
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn project(project_id: i64) -> Self {
        Self {
            project_id: Some(project_id),
            ..Self::default()
        }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(project_id) = self.project_id {
            if task.project_id != project_id {
                return false;
            }
        }
        if let Some(status) = self.status.as_ref() {
            if &task.status != status {
                return false;
            }
        }
        if let Some(query) = self.search.as_deref() {
            let fields = [Some(task.title.as_str()), task.description.as_deref()];
            if !search_matches(query, &fields) {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive text search. The query splits on whitespace and commas;
/// every term must appear in at least one field. A blank query matches all.
pub fn search_matches(query: &str, fields: &[Option<&str>]) -> bool {
    let fields: Vec<String> = fields
        .iter()
        .flatten()
        .map(|field| field.to_lowercase())
        .collect();
    query
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .all(|term| fields.iter().any(|field| field.contains(&term)))
}

/// Every task referencing `project_id`, in store order.
pub fn tasks_of(snapshot: &Snapshot, project_id: i64) -> Vec<&Task> {
    filter_tasks(snapshot, &TaskFilter::project(project_id))
}

/// The project a task points at, or `None` when the reference dangles.
pub fn project_of<'a>(snapshot: &'a Snapshot, task: &Task) -> Option<&'a Project> {
    find_project(snapshot, task.project_id)
}

pub fn find_project(snapshot: &Snapshot, project_id: i64) -> Option<&Project> {
    snapshot
        .projects
        .iter()
        .find(|project| project.id == project_id)
}

/// Projects whose name or description matches `query`, in store order.
pub fn search_projects<'a>(snapshot: &'a Snapshot, query: &str) -> Vec<&'a Project> {
    snapshot
        .projects
        .iter()
        .filter(|project| {
            let fields = [Some(project.name.as_str()), project.description.as_deref()];
            search_matches(query, &fields)
        })
        .collect()
}

pub fn tasks_with_status<'a>(snapshot: &'a Snapshot, status: &TaskStatus) -> Vec<&'a Task> {
    filter_tasks(snapshot, &TaskFilter::status(status.clone()))
}

pub fn filter_tasks<'a>(snapshot: &'a Snapshot, filter: &TaskFilter) -> Vec<&'a Task> {
    snapshot
        .tasks
        .iter()
        .filter(|task| filter.matches(task))
        .collect()
}
