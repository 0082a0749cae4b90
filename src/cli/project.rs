//! taskboard projects command implementation.

use serde::Serialize;

use crate::cli::BoardContext;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::resolve;
use crate::stats::{self, ProjectSummary};

pub(crate) struct ListOptions {
    pub ctx: BoardContext,
    pub search: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ProjectListOutput {
    total: usize,
    projects: Vec<ProjectSummary>,
}

pub(crate) fn run_list(options: ListOptions) -> Result<()> {
    let ctx = options.ctx;
    let projects: Vec<ProjectSummary> = match options.search.as_deref() {
        Some(query) => resolve::search_projects(&ctx.snapshot, query)
            .into_iter()
            .map(|project| stats::project_summary(&ctx.snapshot, project))
            .collect(),
        None => stats::project_summaries(&ctx.snapshot),
    };

    let mut human = HumanOutput::new("Projects");
    human.push_field("Total", projects.len());
    if let Some(query) = options.search.as_deref() {
        human.push_field("Search", query);
    }
    for project in &projects {
        let mut line = format!(
            "#{} {} - {} tasks ({} done)",
            project.id, project.name, project.task_count, project.completed_task_count
        );
        if let Some(description) = project.description.as_ref() {
            line.push_str(&format!(": {description}"));
        }
        human.push_row(line);
    }

    let output = ProjectListOutput {
        total: projects.len(),
        projects,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "projects",
        &output,
        &human,
    )
}
