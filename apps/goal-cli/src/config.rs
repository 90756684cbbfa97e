//! Session configuration from goals.toml

use std::path::Path;

use anyhow::Context;
use goal_list::{Entry, EntryId, GoalListError, GoalListStore};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Initial list contents
    #[serde(default)]
    pub seed: SeedConfig,

    /// Display / output configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// What the list holds when the session starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start from the four sample goals when no `goals` are listed
    #[serde(default = "default_demo")]
    pub demo: bool,

    /// Explicit seed goals, in display order (newest first)
    #[serde(default)]
    pub goals: Vec<SeedGoal>,

    /// Next id to assign; defaults to one past the highest seeded id
    pub next_id: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo: default_demo(),
            goals: Vec::new(),
            next_id: None,
        }
    }
}

/// One seeded goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedGoal {
    pub id: u64,
    pub text: String,
}

/// Display / output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the `#id` column. Override with `--no-ids`.
    #[serde(default = "default_show_ids")]
    pub show_ids: bool,

    /// Redraw the list after every successful add or remove
    #[serde(default = "default_render_after_change")]
    pub render_after_change: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_ids: default_show_ids(),
            render_after_change: default_render_after_change(),
        }
    }
}

// Serde default functions
fn default_demo() -> bool {
    true
}

fn default_show_ids() -> bool {
    true
}

fn default_render_after_change() -> bool {
    true
}

impl GoalsConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load config, returning the default if the file doesn't exist.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

impl SeedConfig {
    /// Build the store the session starts with.
    pub fn build_store(&self) -> Result<GoalListStore, GoalListError> {
        if self.goals.is_empty() {
            if self.demo {
                if let Some(next_id) = self.next_id {
                    tracing::warn!(next_id, "seed.next_id has no effect with the demo seed");
                }
                return Ok(GoalListStore::demo());
            }
            let next_id = self.next_id.map_or(EntryId::FIRST, EntryId::new);
            return GoalListStore::with_entries(Vec::new(), next_id);
        }

        let max_id = self.goals.iter().map(|g| g.id).max().unwrap_or(0);
        let next_id = self.next_id.unwrap_or_else(|| max_id.saturating_add(1));
        let entries = self.goals.iter().map(|g| Entry {
            id: EntryId::new(g.id),
            text: g.text.clone(),
        });
        GoalListStore::with_entries(entries, EntryId::new(next_id))
    }
}
