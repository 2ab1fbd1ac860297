//! Shared output formatting for clitodo commands.

use serde::Serialize;

use crate::error::{Error, JsonError, Result};
use crate::todo::Todo;

pub const SCHEMA_VERSION: &str = "clitodo.v1";

const TABLE_COLUMNS: [&str; 4] = ["ID.  ", "| Priority  ", "| Done  ", "| Description  "];

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    body: Vec<String>,
    next_steps: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            body: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    /// Append a line printed verbatim after the header
    pub fn push_line(&mut self, value: impl Into<String>) {
        self.body.push(value.into());
    }

    pub fn push_next_step(&mut self, value: impl Into<String>) {
        self.next_steps.push(value.into());
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        let next_steps = human.map(|h| h.next_steps.clone()).unwrap_or_default();

        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            next_steps: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
            next_steps,
        };

        println!("{}", to_json(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{}", format_human(human));
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    let next_steps = error_next_steps(err);
    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: JsonError,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            next_steps: Vec<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: JsonError::from(err),
            next_steps,
        };

        println!("{}", to_json(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = next_steps.first() {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = Vec::new();
    lines.push(output.header.clone());

    push_summary(&mut lines, &output.summary);
    if !output.body.is_empty() {
        lines.push(String::new());
        lines.extend(output.body.iter().cloned());
    }
    push_section(&mut lines, "Next steps", &output.next_steps);

    lines.join("\n")
}

/// Render the to-do list as a fixed-width table, numbering rows from 1
pub fn format_todo_table(todos: &[Todo]) -> Vec<String> {
    let header = TABLE_COLUMNS.concat();
    let rule = "-".repeat(header.len());

    let mut lines = vec![header, rule.clone()];
    for (index, todo) in todos.iter().enumerate() {
        lines.push(format!(
            "{:<id_w$}| ({}){:<pad$}| {:<done_w$}| {}",
            index + 1,
            todo.priority,
            "",
            todo.done,
            todo.description,
            id_w = TABLE_COLUMNS[0].len(),
            pad = TABLE_COLUMNS[1].len() - 5,
            done_w = TABLE_COLUMNS[2].len() - 2,
        ));
    }
    lines.push(rule);
    lines
}

pub fn infer_command_name_from_args() -> String {
    command_name(std::env::args().skip(1))
}

fn command_name(args: impl IntoIterator<Item = String>) -> String {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config-dir" {
            args.next();
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return arg;
    }
    "clitodo".to_string()
}

fn error_next_steps(err: &Error) -> Vec<String> {
    match err {
        Error::NotInitialized(_) | Error::StorageNotFound(_) => {
            vec!["clitodo init".to_string()]
        }
        Error::ReadError { .. } => {
            vec!["check the database path, or re-run clitodo init".to_string()]
        }
        Error::ParseError { path, .. } => {
            vec![format!("restore {} from a backup", path.display())]
        }
        Error::ConfigInvalid { .. } => vec!["re-run clitodo init".to_string()],
        Error::InvalidId { .. } => vec!["clitodo list".to_string()],
        Error::LockFailed(_) => vec!["retry once the other clitodo process exits".to_string()],
        _ => Vec::new(),
    }
}

fn push_summary(lines: &mut Vec<String>, summary: &[(String, String)]) {
    if summary.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("Summary:".to_string());
    for (key, value) in summary {
        if value.is_empty() {
            lines.push(format!("- {key}"));
        } else {
            lines.push(format!("- {key}: {value}"));
        }
    }
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push(format!("{title}:"));
    for item in items {
        lines.push(format!("- {item}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Priority;

    #[test]
    fn table_rows_line_up_with_header() {
        let mut done = Todo::new("Get milk.", Priority::HIGH);
        done.done = true;
        let todos = vec![done, Todo::new("Wash the car.", Priority::LOW)];

        let lines = format_todo_table(&todos);
        assert_eq!(lines[0], "ID.  | Priority  | Done  | Description  ");
        assert_eq!(lines[2], "1    | (1)       | true  | Get milk.");
        assert_eq!(lines[3], "2    | (3)       | false | Wash the car.");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], lines[4]);
    }

    #[test]
    fn command_name_skips_global_flags() {
        let args = ["--json", "--config-dir", "/tmp/conf", "complete", "2"]
            .map(String::from);
        assert_eq!(command_name(args), "complete");
        assert_eq!(command_name(Vec::new()), "clitodo");
    }

    #[test]
    fn next_steps_point_at_init() {
        let err = Error::NotInitialized("/tmp/config.toml".into());
        assert_eq!(error_next_steps(&err), vec!["clitodo init".to_string()]);
    }
}
