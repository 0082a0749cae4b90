//! taskboard check command implementation.

use crate::check::{self, CheckReport};
use crate::cli::BoardContext;
use crate::error::{Error, Result};
use crate::output::{emit_success, format_human, HumanOutput, OutputOptions};

pub(crate) struct CheckOptions {
    pub ctx: BoardContext,
    pub strict: bool,
    pub json: bool,
    pub quiet: bool,
}

pub(crate) fn run(options: CheckOptions) -> Result<()> {
    let ctx = options.ctx;
    let strict = options.strict || ctx.config.check.strict;
    let report = check::check(&ctx.snapshot);
    let human = human_report(&report, &ctx.source.to_string());

    if strict && !report.is_clean() {
        tracing::debug!(issues = report.issues.len(), "strict check failed");
        if !options.json && !options.quiet {
            println!("{}", format_human(&human));
        }
        return Err(Error::ValidationFailed(report.issues));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "check",
        &report,
        &human,
    )
}

fn human_report(report: &CheckReport, source: &str) -> HumanOutput {
    let header = if report.is_clean() {
        "Board check: no issues"
    } else {
        "Board check: issues found"
    };
    let mut human = HumanOutput::new(header).with_rows_title("Issues");
    human.push_field("Source", source);
    human.push_field("Projects checked", report.projects_checked);
    human.push_field("Tasks checked", report.tasks_checked);
    human.push_field("Issues", report.issues.len());
    for issue in &report.issues {
        human.push_row(format!("{}: {}", issue.kind.as_str(), issue.message));
    }
    human
}
