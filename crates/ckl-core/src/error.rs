//! Typed domain errors for checklist state operations.
//!
//! Storage and I/O failures travel as `anyhow::Error` with context; these
//! variants cover the conditions a caller can actually branch on.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// No stored total count for the list (never created or removed).
    #[error("checklist '{list}' not found")]
    ListNotFound { list: String },

    /// A checklist with this name already has stored state.
    #[error("checklist '{list}' already exists")]
    ListExists { list: String },

    /// Item index outside 1..=len (indices are 1-based, matching storage keys).
    #[error("item {index} out of range for checklist '{list}' ({len} items)")]
    ItemOutOfRange { list: String, index: u32, len: u32 },

    /// A stored counter failed to parse as an integer.
    #[error("corrupt stored value for key '{key}': {value:?}")]
    CorruptValue { key: String, value: String },
}
