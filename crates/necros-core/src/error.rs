//! Error types for the interpreter.
//!
//! The `Display` text of each [`InterpretError`] is the message the player
//! sees. None of these are fatal: the session turns them into error-typed
//! [`CommandResult`](crate::CommandResult)s.

use thiserror::Error;

/// Result type for interpreter operations.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Recoverable failures produced while interpreting a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The leading token is not a command.
    #[error("'{0}' is not recognized as an internal or external command.")]
    UnknownCommand(String),

    /// `cd` without a path.
    #[error("ERROR: Path required. Usage: cd <directory>")]
    MissingPath,

    /// `cat` without a filename.
    #[error("ERROR: Filename required. Usage: cat <filename>")]
    MissingFilename,

    /// `run` without a program name.
    #[error("ERROR: Program required.")]
    MissingProgram,

    /// `cd` target is not in the tree.
    #[error("ERROR: Directory \"{0}\" not found.")]
    DirectoryNotFound(String),

    /// `cat` target is not a visible file.
    #[error("ERROR: File \"{name}\" not found.")]
    FileNotFound {
        /// The name as typed.
        name: String,
        /// Closest visible file name, if any is close enough.
        suggestion: Option<String>,
    },

    /// `cat` was given a directory.
    #[error("\"{name}\" is a directory, not a file.")]
    IsDirectory {
        /// The name as typed.
        name: String,
        /// Canonical directory name for the `cd` hint.
        directory: String,
    },

    /// `run` target is not an executable program.
    #[error("Program \"{0}\" not found.")]
    ProgramNotFound(String),

    /// Ending choice outside A/R/D.
    #[error("INVALID CHOICE. SELECT A, R, OR D.")]
    InvalidChoice(String),

    /// An ending choice outside the Merge.
    #[error("NO DECISION IS PENDING.")]
    NoChoicePending,

    /// Input after the story has ended.
    #[error("SYSTEM HALTED.")]
    SessionOver,
}

impl InterpretError {
    /// Output lines for this error, including any follow-up hint.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.to_string()];
        match self {
            Self::IsDirectory { directory, .. } => lines.push(format!("Use: cd {directory}")),
            Self::FileNotFound {
                suggestion: Some(s),
                ..
            } => lines.push(format!("Did you mean: {s}?")),
            _ => {}
        }
        lines
    }
}
