//! Shell Errors
//!
//! Every error a command can hit. None of them are fatal: the `Display`
//! form is exactly the line printed into the transcript.

use thiserror::Error;

use crate::fs::FsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("bash: {0}: command not found")]
    CommandNotFound(String),

    #[error("{command}: {name}: No such file or directory")]
    FileNotFound { command: String, name: String },

    #[error("{command}: {name}: No such file or directory")]
    DirectoryNotFound { command: String, name: String },

    #[error("{command}: {name}: Not a directory")]
    NotADirectory { command: String, name: String },

    #[error("{0}: missing file operand")]
    MissingOperand(String),

    #[error("No help available for '{0}'")]
    NoHelp(String),
}

impl ShellError {
    /// Attach the issuing command's name to a file system lookup failure.
    pub fn from_fs(command: &str, err: FsError) -> Self {
        match err {
            FsError::NotFound { path } => ShellError::DirectoryNotFound {
                command: command.to_string(),
                name: path,
            },
            FsError::NotDirectory { path } => ShellError::NotADirectory {
                command: command.to_string(),
                name: path,
            },
        }
    }
}
