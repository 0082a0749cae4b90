//! taskboard summary command implementation.

use crate::cli::BoardContext;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::stats;
use crate::task::TaskStatus;

pub(crate) struct SummaryOptions {
    pub ctx: BoardContext,
    pub json: bool,
    pub quiet: bool,
}

pub(crate) fn run(options: SummaryOptions) -> Result<()> {
    let ctx = options.ctx;
    let dashboard = stats::dashboard(&ctx.snapshot, ctx.config.dashboard.recent_projects);

    let mut human = HumanOutput::new(format!("Dashboard ({})", ctx.source))
        .with_rows_title("Recent projects");
    human.push_field("Projects", dashboard.total_projects);
    human.push_field("Tasks", dashboard.total_tasks);
    for entry in &dashboard.task_statuses {
        human.push_field(TaskStatus::parse(&entry.status).label(), entry.count);
    }
    human.push_field(
        "Completion",
        format!("{:.2}%", stats::completion_percent(&ctx.snapshot)),
    );

    for project in &dashboard.recent_projects {
        human.push_row(format!(
            "#{} {} ({} tasks, {} done)",
            project.id, project.name, project.task_count, project.completed_task_count
        ));
    }

    if dashboard.unresolved_tasks > 0 {
        human.push_warning(format!(
            "{} task(s) reference a missing project",
            dashboard.unresolved_tasks
        ));
        human.push_next_step("taskboard check");
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "summary",
        &dashboard,
        &human,
    )
}
