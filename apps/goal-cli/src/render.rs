// render.rs — List renderer: draws the goal list as text.
//
// Rendered rows are cached per entry and keyed by EntryId. Positions shift
// on every add and remove, ids never do, so the cache survives changes
// without rebuilding rows for goals that are still there.

use std::collections::HashMap;
use std::io::{self, Write};

use goal_list::{Entry, EntryId, GoalListStore};

pub const EMPTY_STATE: &str = "No goals yet! Add your first goal above.";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub show_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_ids: true }
    }
}

/// Per-entry rendered rows, keyed by id.
#[derive(Debug, Default)]
pub struct RowCache {
    options: RenderOptions,
    rows: HashMap<EntryId, String>,
}

impl RowCache {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            rows: HashMap::new(),
        }
    }

    /// Bring the cache in line with the store.
    ///
    /// Drops rows whose ids are gone and builds rows for new ids. Returns how
    /// many rows were built.
    pub fn sync(&mut self, store: &GoalListStore) -> usize {
        self.rows.retain(|id, _| store.contains(*id));

        let mut built = 0;
        for entry in store {
            if !self.rows.contains_key(&entry.id) {
                self.rows.insert(entry.id, format_row(entry, self.options));
                built += 1;
            }
        }
        if built > 0 {
            tracing::debug!(built, cached = self.rows.len(), "row cache updated");
        }
        built
    }

    pub fn row(&self, id: EntryId) -> Option<&str> {
        self.rows.get(&id).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

fn format_row(entry: &Entry, options: RenderOptions) -> String {
    if options.show_ids {
        format!("#{:<4} {}", entry.id, entry.text)
    } else {
        format!("- {}", entry.text)
    }
}

/// Draw the list in display order followed by the total.
pub fn render(store: &GoalListStore, cache: &mut RowCache, out: &mut impl Write) -> io::Result<()> {
    cache.sync(store);

    if store.is_empty() {
        writeln!(out, "{}", EMPTY_STATE)?;
    } else {
        for entry in store {
            match cache.row(entry.id) {
                Some(row) => writeln!(out, "{}", row)?,
                None => writeln!(out, "{}", format_row(entry, cache.options))?,
            }
        }
    }
    writeln!(out, "Total Goals: {}", store.count())
}
