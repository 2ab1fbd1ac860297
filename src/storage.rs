//! Storage layer for the to-do database
//!
//! The database is a single JSON file holding the whole to-do list:
//!
//! ```text
//! [
//!     {
//!         "Description": "Get milk.",
//!         "Priority": 2,
//!         "Done": false
//!     }
//! ]
//! ```
//!
//! Every command does one full read-modify-write cycle. Mutations hold an
//! advisory lock on `<db>.lock` for the whole cycle and replace the file with
//! an atomic rename, so the file always holds a complete snapshot.
//!
//! The lock file stays beside the database after the command exits (for
//! example `~/.me_todo.json.lock`). It is always empty and safe to delete
//! while no clitodo process is running.
//!
//! Ids are positional: a to-do's id is its 1-based index at read time, and
//! removing an item renumbers everything after it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{AddError, Error, Result};
use crate::lock::{self, FileLock, DEFAULT_LOCK_TIMEOUT_MS};
use crate::todo::{normalize_description, Priority, Todo};

/// Handle on a to-do database file
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
    lock_timeout_ms: u64,
}

impl TodoStore {
    /// Bind to a database file. Nothing is read until an operation runs.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }

    /// Override how long mutations wait for the database lock
    pub fn with_lock_timeout(mut self, timeout_ms: u64) -> Self {
        self.lock_timeout_ms = timeout_ms;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    // =========================================================================
    // Whole-file I/O
    // =========================================================================

    /// Write an empty to-do list, replacing anything already there
    pub fn initialize(&self) -> Result<()> {
        self.locked(|| self.save_all(&[]))
    }

    /// Read and parse the full list
    pub fn load_all(&self) -> Result<Vec<Todo>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::ReadError {
            path: self.path.clone(),
            source,
        })?;
        let todos: Vec<Todo> =
            serde_json::from_str(&content).map_err(|source| Error::ParseError {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "loaded to-dos");
        Ok(todos)
    }

    /// Serialize the full list and replace the file
    pub fn save_all(&self, todos: &[Todo]) -> Result<()> {
        let data = encode(todos).map_err(|err| Error::WriteError {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, err),
        })?;
        lock::write_atomic(&self.path, &data).map_err(|source| Error::WriteError {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = todos.len(), "saved to-dos");
        Ok(())
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Append a new open to-do built from command-line words.
    ///
    /// When storage fails the built record is still handed back inside
    /// `AddError::NotSaved`.
    pub fn add<S: AsRef<str>>(
        &self,
        words: &[S],
        priority: Priority,
    ) -> std::result::Result<Todo, AddError> {
        let description = normalize_description(words).map_err(AddError::Rejected)?;
        let todo = Todo::new(description, priority);

        let result = self.locked(|| {
            let mut todos = self.load_all()?;
            todos.push(todo.clone());
            self.save_all(&todos)
        });

        match result {
            Ok(()) => Ok(todo),
            Err(error) => Err(AddError::NotSaved { todo, error }),
        }
    }

    /// Look up a single to-do by id
    pub fn get(&self, id: usize) -> Result<Todo> {
        let mut todos = self.load_all()?;
        let index = resolve_id(id, todos.len())?;
        Ok(todos.swap_remove(index))
    }

    /// Mark a to-do as done and return it
    pub fn mark_done(&self, id: usize) -> Result<Todo> {
        self.locked(|| {
            let mut todos = self.load_all()?;
            let index = resolve_id(id, todos.len())?;
            todos[index].done = true;
            let todo = todos[index].clone();
            self.save_all(&todos)?;
            Ok(todo)
        })
    }

    /// Remove a to-do and return it. Later ids shift down by one.
    pub fn remove(&self, id: usize) -> Result<Todo> {
        self.locked(|| {
            let mut todos = self.load_all()?;
            let index = resolve_id(id, todos.len())?;
            let todo = todos.remove(index);
            self.save_all(&todos)?;
            Ok(todo)
        })
    }

    /// Drop every to-do. The current contents are not read.
    pub fn remove_all(&self) -> Result<()> {
        self.locked(|| self.save_all(&[]))
    }

    /// Return the full list unchanged
    pub fn list_all(&self) -> Result<Vec<Todo>> {
        self.load_all()
    }

    fn locked<T>(&self, op: impl FnOnce() -> Result<T>) -> Result<T> {
        let _lock = FileLock::acquire(lock::lock_path_for(&self.path), self.lock_timeout_ms)?;
        op()
    }
}

/// Create an empty database at `path`
pub fn init_storage(path: &Path) -> Result<()> {
    TodoStore::open(path).initialize()
}

/// Map a 1-based id onto an index into a list of `len` items
pub fn resolve_id(id: usize, len: usize) -> Result<usize> {
    if id == 0 || id > len {
        return Err(Error::InvalidId { id, len });
    }
    Ok(id - 1)
}

fn encode(todos: &[Todo]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    todos.serialize(&mut serializer)?;
    Ok(buf)
}
