//! Store error types.

use std::fmt;

/// The kind of record a store operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Location,
    Trip,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Location => "location",
            RecordKind::Trip => "trip",
        };
        f.write_str(s)
    }
}

/// Errors from the durable store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The referenced record does not exist
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: String },

    /// A conditional write observed a different version than expected
    #[error("conflicting update for trip {id}: expected version {expected}, found {found}")]
    Conflict {
        id: String,
        expected: u64,
        found: u64,
    },

    /// The store itself failed
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
