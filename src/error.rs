//! Error types for queue access

use std::fmt;

use thiserror::Error;

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, Error>;

/// The queue operation that hit an empty queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Front,
    Rear,
    Pop,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Access::Front => "front",
            Access::Rear => "rear",
            Access::Pop => "pop",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when reading from a queue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Empty queue access: {op}")]
    EmptyQueueAccess { op: Access },
}

impl Error {
    pub fn op(&self) -> Access {
        match *self {
            Error::EmptyQueueAccess { op } => op,
        }
    }
}
