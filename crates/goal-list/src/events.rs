// events.rs — Change events and their dispatch.
//
// Every successful add or remove produces a GoalEvent. Observers (the
// renderer, the log, tests) implement EventSink and register with an
// EventDispatcher. ObservedStore ties a store and a dispatcher together so
// callers cannot forget to announce a change.
//
// Dispatch is synchronous: an event reaches every sink before the mutating
// call returns.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntryId};
use crate::error::GoalListError;
use crate::store::GoalListStore;

/// Events emitted when the goal list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GoalEvent {
    /// A goal was added at `position` (always 0 for `add`).
    GoalAdded {
        id: EntryId,
        text: String,
        position: usize,
        timestamp: DateTime<Utc>,
    },

    /// A goal was removed from `position`.
    GoalRemoved {
        id: EntryId,
        text: String,
        position: usize,
        timestamp: DateTime<Utc>,
    },

    /// An add was rejected; the list did not change.
    AddRejected {
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl GoalEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            GoalEvent::GoalAdded { .. } => "goal_added",
            GoalEvent::GoalRemoved { .. } => "goal_removed",
            GoalEvent::AddRejected { .. } => "add_rejected",
        }
    }

    /// The goal this event is about, if any.
    pub fn id(&self) -> Option<EntryId> {
        match self {
            GoalEvent::GoalAdded { id, .. } | GoalEvent::GoalRemoved { id, .. } => Some(*id),
            GoalEvent::AddRejected { .. } => None,
        }
    }

    pub fn goal_added(entry: &Entry, position: usize) -> Self {
        GoalEvent::GoalAdded {
            id: entry.id,
            text: entry.text.clone(),
            position,
            timestamp: Utc::now(),
        }
    }

    pub fn goal_removed(entry: &Entry, position: usize) -> Self {
        GoalEvent::GoalRemoved {
            id: entry.id,
            text: entry.text.clone(),
            position,
            timestamp: Utc::now(),
        }
    }

    pub fn add_rejected(error: &GoalListError) -> Self {
        GoalEvent::AddRejected {
            reason: error.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Receives goal list events.
///
/// Errors are reported back to the dispatcher, which logs them and moves on.
pub trait EventSink {
    fn send(&self, event: &GoalEvent) -> Result<(), GoalListError>;
}

/// Writes each event as a structured tracing record.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn send(&self, event: &GoalEvent) -> Result<(), GoalListError> {
        let json = serde_json::to_string(event).map_err(|e| GoalListError::Sink(e.to_string()))?;
        tracing::info!(event_type = event.event_type(), payload = %json, "goal list changed");
        Ok(())
    }
}

/// Keeps every event in memory.
///
/// Clones share the same buffer, so one handle can be registered with a
/// dispatcher while another is kept for reading.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<GoalEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<GoalEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return the events received so far.
    pub fn drain(&self) -> Vec<GoalEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for MemorySink {
    fn send(&self, event: &GoalEvent) -> Result<(), GoalListError> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
#[derive(Default)]
pub struct EventDispatcher {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &GoalEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!(event_type = event.event_type(), "event sink error: {}", e);
            }
        }
    }
}

/// A store that announces its own changes.
///
/// Reads go straight to the inner store. `add` and `remove` dispatch one
/// event after a successful change; a remove of an unknown id changes
/// nothing and dispatches nothing.
pub struct ObservedStore {
    store: GoalListStore,
    dispatcher: EventDispatcher,
}

impl ObservedStore {
    pub fn new(store: GoalListStore, dispatcher: EventDispatcher) -> Self {
        Self { store, dispatcher }
    }

    pub fn add(&mut self, text: &str) -> Result<Entry, GoalListError> {
        match self.store.add(text) {
            Ok(entry) => {
                self.dispatcher.dispatch(&GoalEvent::goal_added(&entry, 0));
                Ok(entry)
            }
            Err(e) => {
                self.dispatcher.dispatch(&GoalEvent::add_rejected(&e));
                Err(e)
            }
        }
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.store.take(id) {
            Some((position, entry)) => {
                self.dispatcher.dispatch(&GoalEvent::goal_removed(&entry, position));
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[Entry] {
        self.store.list()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &GoalListStore {
        &self.store
    }

    pub fn into_inner(self) -> GoalListStore {
        self.store
    }
}
