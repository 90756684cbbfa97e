// entry.rs — Entry: one goal and its stable identity.
//
// An EntryId is assigned once, when the entry is added, and never changes.
// Ids come from a strictly increasing counter owned by the store, so an id
// is never handed to a second entry even after the first one is removed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of an entry.
///
/// `#[serde(transparent)]` keeps this a bare integer on the wire, so an
/// entry serializes as `{"id": 3, "text": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// The first id a fresh store hands out.
    pub const FIRST: EntryId = EntryId(1);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` when the counter is exhausted.
    pub fn checked_next(self) -> Option<EntryId> {
        self.0.checked_add(1).map(EntryId)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the rendered form "#3" as well as "3".
        s.trim().trim_start_matches('#').parse().map(EntryId)
    }
}

/// A single goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identity, assigned by the store.
    pub id: EntryId,

    /// Goal text, never empty and never padded with whitespace.
    pub text: String,
}

impl Entry {
    /// Build an entry from raw text, trimming it first.
    ///
    /// Returns `None` when nothing is left after trimming. Only the store
    /// and seed loading construct entries; callers go through `add`.
    pub(crate) fn from_raw(id: EntryId, raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
        })
    }
}
