//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can fail with.
///
/// The first four variants are input problems and are turned into a fixed
/// reply by [`CommandError::user_message`]. `Storage` is not an input
/// problem and must reach the caller.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The command line had the wrong number of tokens
    #[error("Expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    /// The contact has no phone at the position the command needs
    #[error("Contact {0} has no phone number")]
    MissingPhone(String),

    /// Reading or writing the data file failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// How a handler failure is reported back to the session.
#[derive(Debug)]
pub enum Outcome {
    /// Shown to the user; the session continues.
    Reply(&'static str),
    /// Not an input problem; propagated to the caller.
    Fatal(CommandError),
}

impl CommandError {
    /// Map an input error to its reply, or hand back anything else.
    pub fn user_message(self) -> Outcome {
        match self {
            Self::Validation(_) => Outcome::Reply("Please enter a valid command."),
            Self::NotFound(_) => Outcome::Reply("Contact with that name not found."),
            Self::ArgumentCount { .. } | Self::MissingPhone(_) => {
                Outcome::Reply("Please enter both name and phone number, separated by a space.")
            }
            other => Outcome::Fatal(other),
        }
    }
}

/// Errors that can occur while loading or saving an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The address book could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// The data file content is not a valid address book
    #[error("Failed to decode address book: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
