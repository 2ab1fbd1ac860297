//! Command-line interface for clitodo
//!
//! This module defines the CLI structure using clap derive macros.
//! Command handlers live in their own submodules.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;

mod init;
mod prompt;
mod todo;

/// clitodo - a personal to-do list
///
/// Keeps a short list of to-dos in a local JSON file. Run `clitodo init`
/// once to choose where the list lives.
#[derive(Parser, Debug)]
#[command(name = "clitodo")]
#[command(author, about, long_about = None)]
#[command(version = concat!("v", env!("CARGO_PKG_VERSION")))]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Directory holding config.toml (defaults to the platform config directory)
    #[arg(long, global = true, env = "CLITODO_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the to-do database
    Init {
        /// Where to keep the to-do database (asked for when omitted on a terminal)
        #[arg(short = 'd', long)]
        db_path: Option<PathBuf>,
    },

    /// Add a new to-do with a DESCRIPTION
    Add {
        /// Words of the description
        #[arg(required = true)]
        description: Vec<String>,

        /// Priority from 1 (highest) to 3
        #[arg(
            short,
            long,
            default_value_t = 2,
            value_parser = clap::value_parser!(u8).range(1..=3)
        )]
        priority: u8,
    },

    /// List all to-dos
    List,

    /// Complete a to-do by setting it as done using its TODO_ID
    Complete {
        /// Id shown by `clitodo list`
        todo_id: usize,
    },

    /// Remove a to-do using its TODO_ID
    Remove {
        /// Id shown by `clitodo list`
        todo_id: usize,

        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Remove all to-dos
    Clear {
        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init { db_path } => init::run(init::InitOptions {
                db_path,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Add {
                description,
                priority,
            } => todo::run_add(todo::AddOptions {
                description,
                priority,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List => todo::run_list(todo::ListOptions {
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Complete { todo_id } => todo::run_complete(todo::CompleteOptions {
                todo_id,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Remove { todo_id, force } => todo::run_remove(todo::RemoveOptions {
                todo_id,
                force,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Clear { force } => todo::run_clear(todo::ClearOptions {
                force,
                config_dir: self.config_dir,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
