// input.rs — Input collector: turns a line of user text into an add.
//
// Validation lives in the store; this module only maps the outcome to
// something the session can print. A rejected goal is a notice, never a
// prompt the user has to dismiss.

use goal_list::{Entry, GoalListError, ObservedStore};

/// Shown when the user submits blank text.
pub const EMPTY_GOAL_NOTICE: &str = "Please enter a valid goal!";

/// Outcome of submitting one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    Added(Entry),
    Rejected(String),
}

/// Submit raw input to the store. Trimming happens in `add`.
pub fn submit(store: &mut ObservedStore, raw: &str) -> Submission {
    match store.add(raw) {
        Ok(entry) => Submission::Added(entry),
        Err(GoalListError::EmptyText) => Submission::Rejected(EMPTY_GOAL_NOTICE.to_string()),
        Err(e) => {
            tracing::warn!("goal not added: {}", e);
            Submission::Rejected(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goal_list::{EntryId, EventDispatcher, GoalListStore};

    fn store() -> ObservedStore {
        ObservedStore::new(GoalListStore::new(), EventDispatcher::new())
    }

    #[test]
    fn submit_adds_trimmed_goal() {
        let mut store = store();
        let result = submit(&mut store, "  Ship v1 ");
        assert_eq!(
            result,
            Submission::Added(Entry {
                id: EntryId::new(1),
                text: "Ship v1".into(),
            })
        );
    }

    #[test]
    fn blank_submit_is_rejected_with_notice() {
        let mut store = store();
        assert_eq!(
            submit(&mut store, "   "),
            Submission::Rejected(EMPTY_GOAL_NOTICE.to_string())
        );
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn exhausted_counter_is_reported() {
        let inner = GoalListStore::with_entries(Vec::new(), EntryId::new(u64::MAX)).unwrap();
        let mut store = ObservedStore::new(inner, EventDispatcher::new());
        assert_eq!(
            submit(&mut store, "one more"),
            Submission::Rejected("goal id space exhausted".to_string())
        );
    }
}
