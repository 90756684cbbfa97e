// error.rs — Error types for the goal list.

use thiserror::Error;

use crate::entry::EntryId;

/// Errors that can occur while building or changing a goal list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalListError {
    /// The goal text was empty after trimming.
    #[error("empty goal text")]
    EmptyText,

    /// The id counter cannot advance any further.
    #[error("goal id space exhausted")]
    IdSpaceExhausted,

    /// A seed sequence contained the same id twice.
    #[error("duplicate goal id in seed: {0}")]
    DuplicateId(EntryId),

    /// The seed's next id does not exceed every id already in use.
    #[error("next id {next_id} must be greater than every seeded id (max {max_id})")]
    NextIdTooLow { next_id: EntryId, max_id: EntryId },

    /// An event sink failed to accept an event (non-fatal).
    #[error("event sink error: {0}")]
    Sink(String),
}

impl GoalListError {
    /// Whether the caller can simply report this and carry on with the
    /// store untouched.
    pub fn is_validation(&self) -> bool {
        matches!(self, GoalListError::EmptyText)
    }
}
