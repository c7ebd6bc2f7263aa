//! Script compilation errors.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Why a script was rejected.
///
/// Line numbers are 1-based and count every input line, including blank
/// and comment lines.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The first token of a line is not a known command.
    #[error("line {line}: unknown command: {command}")]
    UnknownCommand {
        /// Offending line.
        line: usize,
        /// The lower-cased command token.
        command: String,
    },

    /// A command got the wrong number of arguments.
    #[error("line {line}: {command} requires {expected} arguments, got {found}")]
    ArgumentCount {
        /// Offending line.
        line: usize,
        /// Command name.
        command: &'static str,
        /// Required argument count.
        expected: usize,
        /// Given argument count.
        found: usize,
    },

    /// An argument that must be a number is not.
    #[error("line {line}: invalid number {argument:?}")]
    InvalidFloat {
        /// Offending line.
        line: usize,
        /// The argument text.
        argument: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// An argument that must be an integer is not.
    #[error("line {line}: invalid integer {argument:?}")]
    InvalidInteger {
        /// Offending line.
        line: usize,
        /// The argument text.
        argument: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// Reading the script failed.
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    /// The line the error was found on, if it came from a specific line.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnknownCommand { line, .. }
            | Self::ArgumentCount { line, .. }
            | Self::InvalidFloat { line, .. }
            | Self::InvalidInteger { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
