use std::io;

use thiserror::Error;

/// Errors surfaced to the console user. Every one of these is printed as an
/// advisory line; none of them aborts the process.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("class name missing")]
    ClassNameMissing,

    #[error("class doesn't exist")]
    ClassNotFound,

    #[error("instance id missing")]
    InstanceIdMissing,

    #[error("no instance found")]
    InstanceNotFound,

    #[error("attribute name missing")]
    AttributeNameMissing,

    #[error("value missing")]
    ValueMissing,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),
}
