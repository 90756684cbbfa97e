//! # goals
//!
//! Interactive terminal front end for the goal list.
//!
//! Reads one command per line from stdin and draws the list on stdout:
//! - `add <text>` — add a goal at the top
//! - `rm <id>` — remove a goal by id
//! - `list` / `count` — show the list or its size
//!
//! Logs go to stderr so they never mix with the list output.

mod config;
mod input;
mod render;
mod session;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use goal_list::{EventDispatcher, GoalListStore, ObservedStore, TracingSink};
use tracing_subscriber::EnvFilter;

use crate::config::GoalsConfig;
use crate::render::RenderOptions;
use crate::session::{Session, SessionOptions};

/// Keep a short list of goals for this terminal session.
#[derive(Parser)]
#[command(name = "goals", version, about)]
struct Cli {
    /// Configuration file (missing file means defaults).
    #[arg(long, default_value = "goals.toml")]
    config: PathBuf,

    /// Start with an empty list instead of the configured seed.
    #[arg(long)]
    empty: bool,

    /// Hide goal ids in the list.
    #[arg(long)]
    no_ids: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("goal_list={}", level).parse()?)
                .add_directive(format!("goals={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = GoalsConfig::load_or_default(&cli.config)?;

    let store = if cli.empty {
        GoalListStore::new()
    } else {
        config
            .seed
            .build_store()
            .with_context(|| format!("invalid seed in {}", cli.config.display()))?
    };
    tracing::info!(
        count = store.count(),
        next_id = %store.next_id(),
        "goal list ready"
    );

    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_sink(Box::new(TracingSink));

    let stdin = std::io::stdin();
    let options = SessionOptions {
        render: RenderOptions {
            show_ids: config.display.show_ids && !cli.no_ids,
        },
        render_after_change: config.display.render_after_change,
        prompt: stdin.is_terminal(),
    };

    let mut session = Session::new(ObservedStore::new(store, dispatcher), options);
    let mut stdout = std::io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
