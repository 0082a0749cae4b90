//! Board statistics.
//!
//! Every function is a fresh pass over the snapshot; nothing is cached.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::project::Project;
use crate::resolve;
use crate::store::Snapshot;
use crate::task::TaskStatus;

pub const DEFAULT_RECENT_PROJECTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub task_count: usize,
    pub completed_task_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub generated_at: DateTime<Utc>,
    pub total_projects: usize,
    pub total_tasks: usize,
    pub todo_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
    pub unresolved_tasks: usize,
    pub task_statuses: Vec<StatusCount>,
    pub recent_projects: Vec<ProjectSummary>,
}

pub fn project_count(snapshot: &Snapshot) -> usize {
    snapshot.projects.len()
}

pub fn task_count(snapshot: &Snapshot) -> usize {
    snapshot.tasks.len()
}

pub fn completed_task_count(snapshot: &Snapshot) -> usize {
    status_task_count(snapshot, &TaskStatus::Done)
}

pub fn task_count_for_project(snapshot: &Snapshot, project_id: i64) -> usize {
    resolve::tasks_of(snapshot, project_id).len()
}

pub fn completed_task_count_for_project(snapshot: &Snapshot, project_id: i64) -> usize {
    resolve::tasks_of(snapshot, project_id)
        .into_iter()
        .filter(|task| task.status.is_done())
        .count()
}

pub fn status_task_count(snapshot: &Snapshot, status: &TaskStatus) -> usize {
    snapshot
        .tasks
        .iter()
        .filter(|task| &task.status == status)
        .count()
}

/// Tasks whose project reference does not resolve.
pub fn unresolved_task_count(snapshot: &Snapshot) -> usize {
    snapshot
        .tasks
        .iter()
        .filter(|task| resolve::project_of(snapshot, task).is_none())
        .count()
}

/// Per-status counts: the known statuses first (always present), then any
/// unrecognised values in text order.
pub fn status_counts(snapshot: &Snapshot) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = TaskStatus::KNOWN
        .iter()
        .map(|status| StatusCount {
            status: status.as_str().to_string(),
            count: status_task_count(snapshot, status),
        })
        .collect();

    let mut other: BTreeMap<&str, usize> = BTreeMap::new();
    for task in &snapshot.tasks {
        if let TaskStatus::Other(value) = &task.status {
            *other.entry(value.as_str()).or_insert(0) += 1;
        }
    }
    counts.extend(other.into_iter().map(|(status, count)| StatusCount {
        status: status.to_string(),
        count,
    }));
    counts
}

pub fn project_summary(snapshot: &Snapshot, project: &Project) -> ProjectSummary {
    ProjectSummary {
        id: project.id,
        name: project.name.clone(),
        description: project.description.clone(),
        task_count: task_count_for_project(snapshot, project.id),
        completed_task_count: completed_task_count_for_project(snapshot, project.id),
    }
}

pub fn project_summaries(snapshot: &Snapshot) -> Vec<ProjectSummary> {
    snapshot
        .projects
        .iter()
        .map(|project| project_summary(snapshot, project))
        .collect()
}

pub fn dashboard(snapshot: &Snapshot, recent_limit: usize) -> DashboardStats {
    let recent_projects = snapshot
        .projects
        .iter()
        .take(recent_limit)
        .map(|project| project_summary(snapshot, project))
        .collect();

    DashboardStats {
        generated_at: Utc::now(),
        total_projects: project_count(snapshot),
        total_tasks: task_count(snapshot),
        todo_tasks: status_task_count(snapshot, &TaskStatus::Todo),
        in_progress_tasks: status_task_count(snapshot, &TaskStatus::InProgress),
        completed_tasks: completed_task_count(snapshot),
        unresolved_tasks: unresolved_task_count(snapshot),
        task_statuses: status_counts(snapshot),
        recent_projects,
    }
}

/// Completed share of all tasks, as a percentage rounded to two places.
pub fn completion_percent(snapshot: &Snapshot) -> f64 {
    let total = task_count(snapshot);
    if total == 0 {
        return 0.0;
    }
    round2(completed_task_count(snapshot) as f64 * 100.0 / total as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
