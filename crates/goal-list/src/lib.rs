//! # goal-list
//!
//! An in-memory, ordered list of short text goals with stable identities.
//!
//! Every [`Entry`] gets an [`EntryId`] from a monotonic counter when it is
//! added. Ids are never reassigned, even after the entry is removed, so any
//! consumer that caches per-entry state can key that cache by id instead of
//! by position.
//!
//! ## Key components
//!
//! - [`GoalListStore`] — the single owner of the entries and the id counter
//!   (`add`, `remove`, `list`, `count`)
//! - [`Entry`] / [`EntryId`] — one goal and its stable identity
//! - [`GoalEvent`] — emitted after each successful change
//! - [`EventDispatcher`] / [`EventSink`] — fan-out of events to observers
//! - [`ObservedStore`] — a store that dispatches events as it changes

pub mod entry;
pub mod error;
pub mod events;
pub mod store;

pub use entry::{Entry, EntryId};
pub use error::GoalListError;
pub use events::{EventDispatcher, EventSink, GoalEvent, MemorySink, ObservedStore, TracingSink};
pub use store::GoalListStore;
