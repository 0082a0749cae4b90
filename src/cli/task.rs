//! taskboard tasks and count command implementations.

use serde::Serialize;

use crate::cli::BoardContext;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::present::{self, TaskView};
use crate::resolve::{self, TaskFilter};
use crate::task::TaskStatus;

pub(crate) struct ListOptions {
    pub ctx: BoardContext,
    pub project: Option<i64>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

pub(crate) struct CountOptions {
    pub ctx: BoardContext,
    pub project: Option<i64>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub completed: bool,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct TaskListOutput {
    total: usize,
    tasks: Vec<TaskView>,
}

#[derive(Serialize)]
struct TaskCountOutput {
    total: usize,
}

pub(crate) fn run_list(options: ListOptions) -> Result<()> {
    let ctx = options.ctx;
    let filter = TaskFilter {
        project_id: options.project,
        status: parse_status(options.status.as_deref()),
        search: options.search,
    };
    let tasks = resolve::filter_tasks(&ctx.snapshot, &filter);
    let views = present::task_views(&ctx.snapshot, &tasks);

    let mut human = HumanOutput::new("Tasks");
    human.push_field("Total", views.len());
    if let Some(project_id) = filter.project_id {
        let label = resolve::find_project(&ctx.snapshot, project_id)
            .filter(|project| !project.name.is_empty())
            .map(|project| project.name.clone())
            .unwrap_or_else(|| project_id.to_string());
        human.push_field("Project", label);
    }
    if let Some(status) = filter.status.as_ref() {
        human.push_field("Status", status.label());
    }
    if let Some(query) = filter.search.as_deref() {
        human.push_field("Search", query);
    }
    for view in &views {
        human.push_row(format!(
            "[{}|{}] #{} {} (project: {})",
            view.status_label, view.color, view.id, view.title, view.owner
        ));
        if !view.owner_resolved {
            human.push_warning(format!(
                "task {} references missing project {}",
                view.id, view.project_id
            ));
        }
    }

    let output = TaskListOutput {
        total: views.len(),
        tasks: views,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "tasks",
        &output,
        &human,
    )
}

pub(crate) fn run_count(options: CountOptions) -> Result<()> {
    let ctx = options.ctx;
    let status = if options.completed {
        Some(TaskStatus::Done)
    } else {
        parse_status(options.status.as_deref())
    };
    let filter = TaskFilter {
        project_id: options.project,
        status,
        search: options.search,
    };
    let output = TaskCountOutput {
        total: resolve::filter_tasks(&ctx.snapshot, &filter).len(),
    };

    let human = HumanOutput::new(output.total.to_string());
    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "count",
        &output,
        &human,
    )
}

fn parse_status(value: Option<&str>) -> Option<TaskStatus> {
    value.map(str::trim).map(TaskStatus::parse)
}
