//! Entity store for taskboard.
//!
//! A [`Snapshot`] owns the project and task collections for the lifetime of
//! a session. Every query in the crate borrows a snapshot; nothing mutates
//! one in place. Seed files are the only inbound source:
//!
//! ```json
//! {
//!   "schema_version": "taskboard.seed.v1",
//!   "projects": [{ "id": 1, "name": "Website Design" }],
//!   "tasks": [{ "id": 1, "title": "Design homepage", "status": "TODO", "project_id": 1 }]
//! }
//! ```
//!
//! TOML seeds use the same shape (`[[projects]]` / `[[tasks]]` tables).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::project::Project;
use crate::task::{Task, TaskStatus};

pub const SEED_SCHEMA_VERSION: &str = "taskboard.seed.v1";

/// Immutable view of the board's entities, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    schema_version: Option<String>,
    #[serde(flatten)]
    snapshot: Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Toml,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(SeedFormat::Json),
            Some("toml") => Ok(SeedFormat::Toml),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported seed file '{}' (expected .json or .toml)",
                path.display()
            ))),
        }
    }
}

impl Snapshot {
    /// Build a snapshot from already-materialised collections. No validation.
    pub fn new(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        Self { projects, tasks }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.tasks.is_empty()
    }

    /// Built-in sample board, used when no seed is configured.
    pub fn demo() -> Self {
        Self {
            projects: vec![
                Project::new(1, "Website Design").with_description("Redesign company website"),
                Project::new(2, "Mobile App").with_description("Build iOS & Android app"),
                Project::new(3, "Database Migration").with_description("Migrate to new database"),
            ],
            tasks: vec![
                Task::new(1, "Design homepage", TaskStatus::InProgress, 1),
                Task::new(2, "Fix login bug", TaskStatus::Todo, 1),
                Task::new(3, "Write API docs", TaskStatus::Done, 2),
                Task::new(4, "Setup database", TaskStatus::InProgress, 3),
            ],
        }
    }

    /// Load a seed file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = SeedFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let seed = match format {
            SeedFormat::Json => parse_json(&content),
            SeedFormat::Toml => parse_toml(&content),
        }
        .map_err(|reason| Error::InvalidSeed {
            path: path.to_path_buf(),
            reason,
        })?;
        let snapshot = check_schema(seed).map_err(|reason| Error::InvalidSeed {
            path: path.to_path_buf(),
            reason,
        })?;
        tracing::debug!(
            path = %path.display(),
            projects = snapshot.projects.len(),
            tasks = snapshot.tasks.len(),
            "loaded seed"
        );
        Ok(snapshot)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let seed: SeedFile = serde_json::from_str(content)?;
        check_schema(seed).map_err(Error::InvalidArgument)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let seed: SeedFile = toml::from_str(content)?;
        check_schema(seed).map_err(Error::InvalidArgument)
    }
}

fn parse_json(content: &str) -> std::result::Result<SeedFile, String> {
    serde_json::from_str(content).map_err(|err| err.to_string())
}

fn parse_toml(content: &str) -> std::result::Result<SeedFile, String> {
    toml::from_str(content).map_err(|err| err.to_string())
}

fn check_schema(seed: SeedFile) -> std::result::Result<Snapshot, String> {
    match seed.schema_version.as_deref() {
        None | Some(SEED_SCHEMA_VERSION) => Ok(seed.snapshot),
        Some(other) => Err(format!(
            "unsupported schema_version '{other}' (expected {SEED_SCHEMA_VERSION})"
        )),
    }
}
