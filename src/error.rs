//! Error types for input validation, persistence and the interactive session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A rejected piece of user input. The display text is what the console shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("The input priority is invalid")]
    InvalidPriority,

    #[error("The input date is invalid")]
    InvalidDate,

    #[error("The input time is invalid")]
    InvalidTime,

    #[error("The task is blank")]
    BlankTask,

    #[error("Invalid task number")]
    InvalidTaskNumber,

    #[error("Invalid field")]
    InvalidField,

    #[error("The input action is invalid")]
    InvalidAction,
}

/// Failure while reading or writing the task file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read task file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write task file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("task file {} is not a valid task list: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode task list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure talking to the console.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before the session ended")]
    Closed,
}

/// Anything that stops an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}
