//! Optional validation pass over a snapshot.
//!
//! Queries tolerate every issue reported here. `check` exists for callers
//! that want stricter guarantees and must be invoked explicitly.

use std::collections::HashSet;

use serde::Serialize;

use crate::resolve;
use crate::store::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    DuplicateProjectId,
    DuplicateTaskId,
    DanglingProjectRef,
    UnknownStatus,
    EmptyProjectName,
    EmptyTaskTitle,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::DuplicateProjectId => "duplicate_project_id",
            IssueKind::DuplicateTaskId => "duplicate_task_id",
            IssueKind::DanglingProjectRef => "dangling_project_ref",
            IssueKind::UnknownStatus => "unknown_status",
            IssueKind::EmptyProjectName => "empty_project_name",
            IssueKind::EmptyTaskTitle => "empty_task_title",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Project,
    Task,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub entity: Entity,
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub projects_checked: usize,
    pub tasks_checked: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }
}

pub fn check(snapshot: &Snapshot) -> CheckReport {
    let mut issues = Vec::new();

    let mut seen_projects = HashSet::new();
    for project in &snapshot.projects {
        if !seen_projects.insert(project.id) {
            issues.push(Issue {
                kind: IssueKind::DuplicateProjectId,
                entity: Entity::Project,
                id: project.id,
                message: format!("project id {} appears more than once", project.id),
            });
        }
        if project.name.trim().is_empty() {
            issues.push(Issue {
                kind: IssueKind::EmptyProjectName,
                entity: Entity::Project,
                id: project.id,
                message: format!("project {} has an empty name", project.id),
            });
        }
    }

    let mut seen_tasks = HashSet::new();
    for task in &snapshot.tasks {
        if !seen_tasks.insert(task.id) {
            issues.push(Issue {
                kind: IssueKind::DuplicateTaskId,
                entity: Entity::Task,
                id: task.id,
                message: format!("task id {} appears more than once", task.id),
            });
        }
        if task.title.trim().is_empty() {
            issues.push(Issue {
                kind: IssueKind::EmptyTaskTitle,
                entity: Entity::Task,
                id: task.id,
                message: format!("task {} has an empty title", task.id),
            });
        }
        if !task.status.is_known() {
            issues.push(Issue {
                kind: IssueKind::UnknownStatus,
                entity: Entity::Task,
                id: task.id,
                message: format!("task {} has unknown status '{}'", task.id, task.status),
            });
        }
        if resolve::project_of(snapshot, task).is_none() {
            issues.push(Issue {
                kind: IssueKind::DanglingProjectRef,
                entity: Entity::Task,
                id: task.id,
                message: format!(
                    "task {} references missing project {}",
                    task.id, task.project_id
                ),
            });
        }
    }

    CheckReport {
        projects_checked: snapshot.projects.len(),
        tasks_checked: snapshot.tasks.len(),
        issues,
    }
}
