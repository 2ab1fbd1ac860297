//! To-do record model
//!
//! A `Todo` is serialized with capitalized keys so the on-disk file reads
//! `{"Description": "...", "Priority": 2, "Done": false}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters accepted as the end of a sentence
const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Task priority, 1 (highest) through 3 (lowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const HIGH: Priority = Priority(1);
    pub const MEDIUM: Priority = Priority(2);
    pub const LOW: Priority = Priority(3);

    pub fn new(value: u8) -> Result<Self> {
        match value {
            1..=3 => Ok(Priority(value)),
            other => Err(Error::InvalidPriority(other)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::MEDIUM
    }
}

impl TryFrom<u8> for Priority {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Priority::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// Build an open to-do from an already normalized description
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        Self {
            description: description.into(),
            priority,
            done: false,
        }
    }
}

/// Join command-line words into a single sentence.
///
/// Runs of whitespace collapse to one space and a trailing `.` is added
/// unless the text already ends in terminal punctuation.
pub fn normalize_description<S: AsRef<str>>(words: &[S]) -> Result<String> {
    let mut text = words
        .iter()
        .flat_map(|word| word.as_ref().split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return Err(Error::EmptyDescription);
    }

    if !text.ends_with(TERMINAL_PUNCTUATION) {
        text.push('.');
    }

    Ok(text)
}
