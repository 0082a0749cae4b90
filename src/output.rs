//! Rendering of command results.
//!
//! Commands hand over their serializable data together with a [`HumanOutput`].
//! With `--json` the data goes out inside the versioned envelope and the human
//! warnings and next steps ride along as arrays. Otherwise the human form is
//! printed, unless `--quiet` is set.

use serde::Serialize;

use crate::error::{exit_codes, Error, Result};

pub const SCHEMA_VERSION: &str = "taskboard.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// Human form of a command result: a header, `key: value` fields, one titled
/// list of rows, then warnings and hints.
#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    fields: Vec<(String, String)>,
    rows_title: Option<String>,
    rows: Vec<String>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            fields: Vec::new(),
            rows_title: None,
            rows: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    /// Title printed above the rows, e.g. "Recent projects".
    pub fn with_rows_title(mut self, title: impl Into<String>) -> Self {
        self.rows_title = Some(title.into());
        self
    }

    pub fn push_field(&mut self, key: impl Into<String>, value: impl ToString) {
        self.fields.push((key.into(), value.to_string()));
    }

    pub fn push_row(&mut self, row: impl Into<String>) {
        self.rows.push(row.into());
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn push_next_step(&mut self, step: impl Into<String>) {
        self.next_steps.push(step.into());
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: i32,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    schema_version: &'static str,
    command: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    next_steps: Vec<String>,
}

impl<T: Serialize> Envelope<'_, T> {
    fn print(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: &HumanOutput,
) -> Result<()> {
    if options.json {
        return Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data: Some(data),
            error: None,
            warnings: human.warnings.clone(),
            next_steps: human.next_steps.clone(),
        }
        .print();
    }

    if !options.quiet {
        println!("{}", format_human(human));
    }
    Ok(())
}

/// Report a failed command: the JSON envelope on stdout, or `error:` and
/// `hint:` lines on stderr.
pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);

    if json {
        return Envelope::<()> {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            data: None,
            error: Some(ErrorBody {
                message: err.to_string(),
                code: err.exit_code(),
                kind: error_kind(err),
                details: err.details(),
            }),
            warnings: Vec::new(),
            next_steps,
        }
        .print();
    }

    eprintln!("error: {err}");
    for step in &next_steps {
        eprintln!("hint: {step}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = vec![output.header.clone()];
    lines.extend(
        output
            .fields
            .iter()
            .map(|(key, value)| format!("  {key}: {value}")),
    );

    if !output.rows.is_empty() {
        lines.push(String::new());
        if let Some(title) = output.rows_title.as_ref() {
            lines.push(format!("{title}:"));
        }
        lines.extend(output.rows.iter().map(|row| format!("  {row}")));
    }

    if !output.warnings.is_empty() || !output.next_steps.is_empty() {
        lines.push(String::new());
        lines.extend(output.warnings.iter().map(|w| format!("warning: {w}")));
        lines.extend(output.next_steps.iter().map(|step| format!("hint: {step}")));
    }

    lines.join("\n")
}

/// First non-flag argument, used to label error output before clap has run.
pub fn infer_command_name_from_args() -> String {
    infer_command_name(std::env::args().skip(1))
}

pub fn infer_command_name(args: impl IntoIterator<Item = String>) -> String {
    let mut skip_value = false;
    for arg in args {
        if skip_value {
            skip_value = false;
            continue;
        }
        if matches!(arg.as_str(), "--seed" | "--config") {
            skip_value = true;
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return arg;
    }
    "taskboard".to_string()
}

fn error_kind(err: &Error) -> &'static str {
    match err.exit_code() {
        exit_codes::USER_ERROR => "user_error",
        exit_codes::VALIDATION_FAILED => "validation_failed",
        _ => "operation_failed",
    }
}

fn error_next_steps(err: &Error) -> Vec<String> {
    match err {
        Error::InvalidConfig(_) => vec!["fix .taskboard.toml then retry".to_string()],
        Error::InvalidSeed { path, .. } => {
            vec![format!("fix {} then retry", path.to_string_lossy())]
        }
        Error::ValidationFailed(_) => {
            vec!["fix the listed issues, or run `taskboard check` without --strict".to_string()]
        }
        _ => Vec::new(),
    }
}
