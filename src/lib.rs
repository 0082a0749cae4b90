//! taskboard - Project and Task Dashboard Library
//!
//! This library derives dashboard views from an in-memory board of projects
//! and tasks. All queries are pure reads over a [`store::Snapshot`] and never
//! fail: unresolved project references and unknown statuses fall back to
//! defined values.
//!
//! # Core Concepts
//!
//! - **Snapshot**: the owned project and task collections, loaded from a seed
//! - **Resolver**: task ↔ project lookups (`tasks_of`, `project_of`)
//! - **Statistics**: counts, per-project counts, dashboard aggregates
//! - **Presentation**: status colors and owner labels for task rows
//! - **Check**: an optional, explicitly invoked validation pass
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.taskboard.toml`
//! - `error`: Error types and result aliases
//! - `project` / `task`: Entity records
//! - `store`: Snapshot and seed file loading
//! - `resolve`: Relationship lookups
//! - `stats`: Aggregation
//! - `present`: Presentation mapping
//! - `check`: Validation pass
//! - `output`: Human and JSON output formatting

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod present;
pub mod project;
pub mod resolve;
pub mod stats;
pub mod store;
pub mod task;

pub use error::{Error, Result};
pub use project::Project;
pub use store::Snapshot;
pub use task::{Task, TaskStatus};
