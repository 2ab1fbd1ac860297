//! clitodo init command implementation
//!
//! Records the database location in the config file and writes an empty
//! to-do list there. Without `--db-path` the location is asked for on a
//! terminal and defaults to `~/.<user>_todo.json` otherwise.

use std::path::PathBuf;

use super::prompt;
use crate::config::{default_storage_path, ConfigPaths, Resolver};
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::init_storage;

/// Options for the init command
pub struct InitOptions {
    pub db_path: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct InitReport {
    config: PathBuf,
    database: PathBuf,
}

pub fn run(options: InitOptions) -> Result<()> {
    let resolver = Resolver::new(ConfigPaths::resolve(options.config_dir)?);
    let requested = match options.db_path {
        Some(path) => path,
        None => {
            let default = default_storage_path()?;
            if !options.json && prompt::is_interactive() {
                prompt::database_location(&default)?
            } else {
                default
            }
        }
    };

    let database = resolver.initialize(&requested)?;
    init_storage(&database)?;

    let report = InitReport {
        config: resolver.paths().file().to_path_buf(),
        database: database.clone(),
    };

    let mut human = HumanOutput::new(format!("The to-do database is {}", database.display()));
    human.push_summary("config", report.config.display().to_string());
    human.push_next_step("clitodo add <description>");

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "init",
        &report,
        Some(&human),
    )
}
