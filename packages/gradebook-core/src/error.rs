//! Gradebook error types.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Entity a submission refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Student(i64),
    Lab(i64),
    Problem { lab_id: i64, problem_id: i64 },
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Student(id) => write!(f, "student {}", id),
            Reference::Lab(id) => write!(f, "lab {}", id),
            Reference::Problem { lab_id, problem_id } => {
                write!(f, "problem {} in lab {}", problem_id, lab_id)
            }
        }
    }
}

/// Gradebook operation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradebookError {
    /// Record with the same key already exists
    #[error("{collection} with id {key} already exists")]
    DuplicateKey {
        collection: &'static str,
        key: String,
    },

    /// Lookup that required a result found nothing
    #[error("{collection} with id {key} not found")]
    NotFound {
        collection: &'static str,
        key: String,
    },

    /// Submission refers to an entity that does not exist
    #[error("Unknown {0}")]
    UnknownReference(Reference),

    /// Undo requested without a stored snapshot
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error during persistence
    #[error("I/O error: {0}")]
    IoError(String),

    /// Disk full error during persistence
    #[error("Disk full: {0}")]
    DiskFull(String),

    /// Transient I/O error that may succeed on retry
    #[error("Transient I/O error: {0}")]
    TransientIoError(String),
}

impl GradebookError {
    pub(crate) fn duplicate(collection: &'static str, key: impl ToString) -> Self {
        GradebookError::DuplicateKey {
            collection,
            key: key.to_string(),
        }
    }

    pub(crate) fn not_found(collection: &'static str, key: impl ToString) -> Self {
        GradebookError::NotFound {
            collection,
            key: key.to_string(),
        }
    }

    /// Returns true for conditions the caller can report and move past.
    ///
    /// Persistence and serialization failures are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GradebookError::DuplicateKey { .. }
                | GradebookError::NotFound { .. }
                | GradebookError::UnknownReference(_)
                | GradebookError::NothingToUndo
        )
    }
}
