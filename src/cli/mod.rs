//! Command-line interface for taskboard
//!
//! This module defines the CLI structure using clap derive macros.
//! Each command group is implemented in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::store::Snapshot;

mod check;
mod project;
mod summary;
mod task;

/// taskboard - project and task dashboard
///
/// Loads a board snapshot (a seed file, or the built-in demo board) and
/// prints summary statistics, project lists, and task rows.
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Seed file with projects and tasks (.json or .toml)
    #[arg(long, global = true, env = "TASKBOARD_SEED")]
    pub seed: Option<PathBuf>,

    /// Configuration file (defaults to ./.taskboard.toml when present)
    #[arg(long, global = true, env = "TASKBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dashboard statistics
    Summary,

    /// List projects with their task counts
    Projects {
        /// Only projects whose name or description contains every term
        #[arg(long)]
        search: Option<String>,
    },

    /// List tasks with status color and owning project
    Tasks {
        /// Only tasks of this project id
        #[arg(long)]
        project: Option<i64>,

        /// Only tasks with this status (TODO, IN_PROGRESS, DONE)
        #[arg(long)]
        status: Option<String>,

        /// Only tasks whose title or description contains every term
        #[arg(long)]
        search: Option<String>,
    },

    /// Count tasks
    Count {
        /// Only tasks of this project id
        #[arg(long)]
        project: Option<i64>,

        /// Only tasks with this status (TODO, IN_PROGRESS, DONE)
        #[arg(long, conflicts_with = "completed")]
        status: Option<String>,

        /// Only tasks whose title or description contains every term
        #[arg(long)]
        search: Option<String>,

        /// Only completed tasks
        #[arg(long)]
        completed: bool,
    },

    /// Validate the board (duplicate ids, dangling references, unknown statuses)
    Check {
        /// Fail when any issue is found
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let ctx = load_context(self.seed.as_deref(), self.config.as_deref())?;
        tracing::debug!(source = %ctx.source, command = ?self.command, "dispatch");

        match self.command {
            Commands::Summary => summary::run(summary::SummaryOptions {
                ctx,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Projects { search } => project::run_list(project::ListOptions {
                ctx,
                search,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Tasks {
                project,
                status,
                search,
            } => task::run_list(task::ListOptions {
                ctx,
                project,
                status,
                search,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Count {
                project,
                status,
                search,
                completed,
            } => task::run_count(task::CountOptions {
                ctx,
                project,
                status,
                search,
                completed,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Check { strict } => check::run(check::CheckOptions {
                ctx,
                strict,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Where the board snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    File(PathBuf),
    Demo,
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedSource::File(path) => write!(f, "{}", path.display()),
            SeedSource::Demo => f.write_str("demo data"),
        }
    }
}

pub(crate) struct BoardContext {
    pub snapshot: Snapshot,
    pub config: Config,
    pub source: SeedSource,
}

fn load_context(seed: Option<&Path>, config: Option<&Path>) -> Result<BoardContext> {
    let config = match config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(&std::env::current_dir()?)?,
    };

    let source = match seed.map(Path::to_path_buf).or_else(|| config.seed.clone()) {
        Some(path) => SeedSource::File(path),
        None => SeedSource::Demo,
    };

    let snapshot = match &source {
        SeedSource::File(path) => Snapshot::load(path)?,
        SeedSource::Demo => Snapshot::demo(),
    };

    Ok(BoardContext {
        snapshot,
        config,
        source,
    })
}
