// store.rs — GoalListStore: the ordered, id-stable goal collection.
//
// The store owns both the entries and the id counter. Entries are kept in
// display order, newest first. The counter only moves forward, and only
// when an add succeeds, so ids stay unique across removals.

use std::collections::HashSet;

use crate::entry::{Entry, EntryId};
use crate::error::GoalListError;

/// The single owner of the goal list.
///
/// Mutations take `&mut self`, so a reader can never observe an entry
/// without its id having been consumed from the counter (or the reverse).
#[derive(Debug, Clone)]
pub struct GoalListStore {
    entries: Vec<Entry>,
    next_id: EntryId,
}

impl GoalListStore {
    /// An empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: EntryId::FIRST,
        }
    }

    /// Build a store from a seed sequence (already in display order) and the
    /// next id to hand out.
    ///
    /// Seed texts are trimmed. Fails if a text is blank, if two entries share
    /// an id, or if `next_id` is not greater than every seeded id.
    pub fn with_entries(
        entries: impl IntoIterator<Item = Entry>,
        next_id: EntryId,
    ) -> Result<Self, GoalListError> {
        let mut seen = HashSet::new();
        let mut max_id = EntryId::new(0);
        let mut seeded = Vec::new();

        for entry in entries {
            let entry = Entry::from_raw(entry.id, &entry.text).ok_or(GoalListError::EmptyText)?;
            if !seen.insert(entry.id) {
                return Err(GoalListError::DuplicateId(entry.id));
            }
            max_id = max_id.max(entry.id);
            seeded.push(entry);
        }

        if next_id <= max_id {
            return Err(GoalListError::NextIdTooLow { next_id, max_id });
        }

        tracing::debug!(count = seeded.len(), next_id = %next_id, "seeded goal list");
        Ok(Self {
            entries: seeded,
            next_id,
        })
    }

    /// The four sample goals the demo starts with, ids 4..1, next id 5.
    pub fn demo() -> Self {
        let seed = [
            (4, "Achieve $5M revenue target"),
            (3, "Expand team to 50 members"),
            (2, "Launch new product line in Q2"),
            (1, "Increase customer satisfaction by 25%"),
        ];
        Self {
            entries: seed
                .into_iter()
                .map(|(id, text)| Entry {
                    id: EntryId::new(id),
                    text: text.to_string(),
                })
                .collect(),
            next_id: EntryId::new(5),
        }
    }

    /// Add a goal at the front of the list.
    ///
    /// The text is trimmed first. Blank text fails with
    /// [`GoalListError::EmptyText`] and leaves the store untouched, including
    /// the id counter.
    pub fn add(&mut self, text: &str) -> Result<Entry, GoalListError> {
        let id = self.next_id;
        let entry = Entry::from_raw(id, text).ok_or(GoalListError::EmptyText)?;
        let next_id = id.checked_next().ok_or(GoalListError::IdSpaceExhausted)?;

        self.next_id = next_id;
        self.entries.insert(0, entry.clone());
        tracing::debug!(id = %entry.id, count = self.entries.len(), "goal added");
        Ok(entry)
    }

    /// Remove the goal with this id, keeping the others in order.
    ///
    /// Returns `false` when no goal has that id; that is not an error.
    pub fn remove(&mut self, id: EntryId) -> bool {
        self.take(id).is_some()
    }

    /// Like [`remove`](Self::remove), but hands back the removed entry and
    /// the position it held.
    pub fn take(&mut self, id: EntryId) -> Option<(usize, Entry)> {
        let position = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(position);
        tracing::debug!(id = %id, position, count = self.entries.len(), "goal removed");
        Some((position, entry))
    }

    /// Entries in display order, newest first.
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of goals currently in the list.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// The id the next successful `add` will assign.
    pub fn next_id(&self) -> EntryId {
        self.next_id
    }
}

impl Default for GoalListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a GoalListStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &GoalListStore) -> Vec<u64> {
        store.iter().map(|e| e.id.get()).collect()
    }

    fn entry(id: u64, text: &str) -> Entry {
        Entry {
            id: EntryId::new(id),
            text: text.to_string(),
        }
    }

    #[test]
    fn new_store_is_empty_and_starts_at_one() {
        let store = GoalListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
        assert_eq!(store.next_id(), EntryId::FIRST);
    }

    #[test]
    fn add_places_newest_first() {
        let mut store = GoalListStore::new();
        store.add("a").unwrap();
        store.add("b").unwrap();
        store.add("c").unwrap();
        assert_eq!(ids(&store), vec![3, 2, 1]);
        assert_eq!(store.list()[0].text, "c");
    }

    #[test]
    fn add_trims_text() {
        let mut store = GoalListStore::new();
        let added = store.add("   Ship v1  ").unwrap();
        assert_eq!(added.text, "Ship v1");
        assert_eq!(store.list()[0].text, "Ship v1");
    }

    #[test]
    fn blank_add_consumes_no_id() {
        let mut store = GoalListStore::new();
        store.add("first").unwrap();

        assert_eq!(store.add(""), Err(GoalListError::EmptyText));
        assert_eq!(store.add(" \t "), Err(GoalListError::EmptyText));
        assert_eq!(store.count(), 1);
        assert_eq!(store.next_id(), EntryId::new(2));

        assert_eq!(store.add("second").unwrap().id, EntryId::new(2));
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = GoalListStore::new();
        for text in ["a", "b", "c", "d"] {
            store.add(text).unwrap();
        }
        assert!(store.remove(EntryId::new(3)));
        assert_eq!(ids(&store), vec![4, 2, 1]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut store = GoalListStore::new();
        store.add("a").unwrap();
        assert!(!store.remove(EntryId::new(99)));
        assert_eq!(store.count(), 1);
        assert_eq!(store.next_id(), EntryId::new(2));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = GoalListStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        assert!(store.remove(b.id));
        assert!(store.remove(a.id));
        assert!(store.is_empty());

        let c = store.add("c").unwrap();
        assert_eq!(c.id, EntryId::new(3));
    }

    #[test]
    fn take_reports_position() {
        let mut store = GoalListStore::new();
        store.add("a").unwrap();
        store.add("b").unwrap();
        let (position, removed) = store.take(EntryId::new(1)).unwrap();
        assert_eq!(position, 1);
        assert_eq!(removed.text, "a");
        assert!(store.take(EntryId::new(1)).is_none());
    }

    #[test]
    fn add_fails_when_counter_is_exhausted() {
        let mut store = GoalListStore::with_entries(Vec::new(), EntryId::new(u64::MAX)).unwrap();
        assert_eq!(store.add("last"), Err(GoalListError::IdSpaceExhausted));
        assert!(store.is_empty());
        assert_eq!(store.next_id(), EntryId::new(u64::MAX));
    }

    #[test]
    fn demo_seed_matches_sample_data() {
        let store = GoalListStore::demo();
        assert_eq!(ids(&store), vec![4, 3, 2, 1]);
        assert_eq!(store.next_id(), EntryId::new(5));
        assert_eq!(store.list()[0].text, "Achieve $5M revenue target");
        assert_eq!(store.list()[3].text, "Increase customer satisfaction by 25%");
    }

    #[test]
    fn with_entries_keeps_seed_order_and_trims() {
        let store =
            GoalListStore::with_entries(vec![entry(2, " b "), entry(9, "a")], EntryId::new(10))
                .unwrap();
        assert_eq!(ids(&store), vec![2, 9]);
        assert_eq!(store.get(EntryId::new(2)).unwrap().text, "b");
    }

    #[test]
    fn with_entries_rejects_duplicate_ids() {
        let result =
            GoalListStore::with_entries(vec![entry(1, "a"), entry(1, "b")], EntryId::new(2));
        assert_eq!(result.unwrap_err(), GoalListError::DuplicateId(EntryId::new(1)));
    }

    #[test]
    fn with_entries_rejects_low_next_id() {
        let result =
            GoalListStore::with_entries(vec![entry(5, "a"), entry(2, "b")], EntryId::new(5));
        assert_eq!(
            result.unwrap_err(),
            GoalListError::NextIdTooLow {
                next_id: EntryId::new(5),
                max_id: EntryId::new(5),
            }
        );
    }

    #[test]
    fn with_entries_rejects_blank_text() {
        let result = GoalListStore::with_entries(vec![entry(1, "  ")], EntryId::new(2));
        assert_eq!(result.unwrap_err(), GoalListError::EmptyText);
    }

    #[test]
    fn with_entries_rejects_zero_next_id() {
        let result = GoalListStore::with_entries(Vec::new(), EntryId::new(0));
        assert!(matches!(result, Err(GoalListError::NextIdTooLow { .. })));
    }

    #[test]
    fn contains_and_get() {
        let mut store = GoalListStore::new();
        let added = store.add("x").unwrap();
        assert!(store.contains(added.id));
        assert_eq!(store.get(added.id), Some(&added));
        assert!(!store.contains(EntryId::new(42)));
    }
}
