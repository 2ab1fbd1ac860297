//! clitodo - personal to-do list library
//!
//! This library provides the core functionality for the clitodo CLI tool:
//! a single-user to-do list kept in one local JSON file.
//!
//! # Core Concepts
//!
//! - **To-dos**: a description, a priority from 1 (highest) to 3, and a done flag
//! - **Positional ids**: a to-do's id is its 1-based place in the list
//! - **Database pointer**: a TOML config file records where the list lives
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Config directory resolution and the database pointer
//! - `error`: Error types and result aliases
//! - `lock`: File locking and atomic writes
//! - `output`: JSON envelopes and human-readable rendering
//! - `storage`: Load-mutate-save operations on the to-do database
//! - `todo`: The to-do record and description normalization

pub mod cli;
pub mod config;
pub mod error;
pub mod lock;
pub mod output;
pub mod storage;
pub mod todo;

pub use error::{Error, Result};
