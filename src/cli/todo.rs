//! To-do commands: add, list, complete, remove, clear
//!
//! Each command resolves the database from the config file and then runs a
//! single store operation against it.

use std::path::PathBuf;

use super::prompt::confirm;
use crate::config::{ConfigPaths, Resolver};
use crate::error::{Error, Result};
use crate::output::{emit_success, format_todo_table, HumanOutput, OutputOptions};
use crate::storage::TodoStore;
use crate::todo::{Priority, Todo};

/// Options for the add command
pub struct AddOptions {
    pub description: Vec<String>,
    pub priority: u8,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Options for the list command
pub struct ListOptions {
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Options for the complete command
pub struct CompleteOptions {
    pub todo_id: usize,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Options for the remove command
pub struct RemoveOptions {
    pub todo_id: usize,
    pub force: bool,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

/// Options for the clear command
pub struct ClearOptions {
    pub force: bool,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct TodoReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<usize>,
    #[serde(flatten)]
    todo: &'a Todo,
}

#[derive(serde::Serialize)]
struct ListReport<'a> {
    count: usize,
    todos: Vec<TodoReport<'a>>,
}

#[derive(serde::Serialize)]
struct ClearReport {
    cleared: bool,
}

#[derive(serde::Serialize)]
struct CancelReport {
    cancelled: bool,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let store = open_store(options.config_dir)?;
    let priority = Priority::new(options.priority)?;

    let todo = store.add(options.description.as_slice(), priority).map_err(|err| {
        if let Some(todo) = err.todo() {
            tracing::warn!(description = %todo.description, "to-do not saved");
            if !options.json {
                eprintln!("to-do \"{}\" was not added", todo.description);
            }
        }
        Error::from(err)
    })?;

    let human = HumanOutput::new(format!(
        "to-do: \"{}\" was added with priority: {}",
        todo.description, todo.priority
    ));

    emit_success(
        output_options(options.json, options.quiet),
        "add",
        &TodoReport {
            id: None,
            todo: &todo,
        },
        Some(&human),
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let store = open_store(options.config_dir)?;
    let todos = store.list_all()?;

    let report = ListReport {
        count: todos.len(),
        todos: todos
            .iter()
            .enumerate()
            .map(|(index, todo)| TodoReport {
                id: Some(index + 1),
                todo,
            })
            .collect(),
    };

    let human = if todos.is_empty() {
        let mut human = HumanOutput::new("There are no tasks in the to-do list yet");
        human.push_next_step("clitodo add <description>");
        human
    } else {
        let mut human = HumanOutput::new("to-do list:");
        for line in format_todo_table(&todos) {
            human.push_line(line);
        }
        human
    };

    emit_success(
        output_options(options.json, options.quiet),
        "list",
        &report,
        Some(&human),
    )
}

pub fn run_complete(options: CompleteOptions) -> Result<()> {
    let store = open_store(options.config_dir)?;
    let todo = store.mark_done(options.todo_id)?;

    let human = HumanOutput::new(format!(
        "to-do # {} \"{}\" completed!",
        options.todo_id, todo.description
    ));

    emit_success(
        output_options(options.json, options.quiet),
        "complete",
        &TodoReport {
            id: Some(options.todo_id),
            todo: &todo,
        },
        Some(&human),
    )
}

pub fn run_remove(options: RemoveOptions) -> Result<()> {
    let store = open_store(options.config_dir)?;
    let output = output_options(options.json, options.quiet);

    if !options.force {
        let pending = store.get(options.todo_id)?;
        let prompt = format!(
            "Delete to-do # {}: {}?",
            options.todo_id, pending.description
        );
        if !confirm(&prompt)? {
            return emit_cancelled(output, "remove");
        }
    }

    let todo = store.remove(options.todo_id)?;
    let human = HumanOutput::new(format!(
        "to-do # {}: '{}' was removed",
        options.todo_id, todo.description
    ));

    emit_success(
        output,
        "remove",
        &TodoReport {
            id: Some(options.todo_id),
            todo: &todo,
        },
        Some(&human),
    )
}

pub fn run_clear(options: ClearOptions) -> Result<()> {
    let store = open_store(options.config_dir)?;
    let output = output_options(options.json, options.quiet);

    if !options.force && !confirm("Delete all to-dos?")? {
        return emit_cancelled(output, "clear");
    }

    store.remove_all()?;
    let human = HumanOutput::new("All to-dos were removed");
    emit_success(output, "clear", &ClearReport { cleared: true }, Some(&human))
}

/// Resolve the configured database and make sure it exists
fn open_store(config_dir: Option<PathBuf>) -> Result<TodoStore> {
    let resolver = Resolver::new(ConfigPaths::resolve(config_dir)?);
    let store = TodoStore::open(resolver.resolve_storage_path()?);
    if !store.exists() {
        return Err(Error::StorageNotFound(store.path().to_path_buf()));
    }
    Ok(store)
}

fn emit_cancelled(output: OutputOptions, command: &str) -> Result<()> {
    let human = HumanOutput::new("Operation canceled");
    emit_success(output, command, &CancelReport { cancelled: true }, Some(&human))
}

fn output_options(json: bool, quiet: bool) -> OutputOptions {
    OutputOptions { json, quiet }
}
