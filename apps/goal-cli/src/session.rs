// session.rs — The interactive command loop.
//
// The session owns the store for its whole lifetime. Each line of input is
// one user action and runs to completion before the next line is read.
// The input collector borrows the store mutably for an add; the renderer
// borrows it immutably to draw.

use std::io::{self, BufRead, Write};

use goal_list::{EntryId, ObservedStore};

use crate::input::{self, Submission};
use crate::render::{self, RenderOptions, RowCache};

const HELP: &str = "\
Commands:
  add <text>     add a goal at the top of the list
  rm <id>        remove a goal (also: remove, delete)
  list           show the list
  count          show how many goals there are
  help           show this help
  quit           leave (also: exit, or end of input)";

const INVALID_INPUT: &str = "Invalid input (not UTF-8)";

/// One parsed line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(EntryId),
    List,
    Count,
    Help,
    Quit,
    Blank,
    InvalidId(String),
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Command::Blank,
            "add" => Command::Add(rest.to_string()),
            "rm" | "remove" | "delete" => match rest.parse::<EntryId>() {
                Ok(id) => Command::Remove(id),
                Err(_) => Command::InvalidId(rest.trim().to_string()),
            },
            "list" | "ls" => Command::List,
            "count" => Command::Count,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub render: RenderOptions,
    pub render_after_change: bool,
    /// Print a `> ` prompt before each line (interactive terminals only).
    pub prompt: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            render_after_change: true,
            prompt: false,
        }
    }
}

pub struct Session {
    store: ObservedStore,
    cache: RowCache,
    options: SessionOptions,
}

impl Session {
    pub fn new(store: ObservedStore, options: SessionOptions) -> Self {
        Self {
            store,
            cache: RowCache::new(options.render),
            options,
        }
    }

    /// Run until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported and skipped; reading goes on.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.draw(out)?;

        let mut buf = Vec::new();
        loop {
            if self.options.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(['\n', '\r']),
                Err(e) => {
                    tracing::warn!("skipping input line: {}", e);
                    writeln!(out, "{}", INVALID_INPUT)?;
                    continue;
                }
            };
            if !self.handle(line, out)? {
                break;
            }
        }

        tracing::info!(remaining = self.store.count(), "session ended");
        Ok(())
    }

    /// Apply one line. Returns `false` when the session should end.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        match Command::parse(line) {
            Command::Add(text) => match input::submit(&mut self.store, &text) {
                Submission::Added(entry) => {
                    writeln!(out, "Added #{}", entry.id)?;
                    self.after_change(out)?;
                }
                Submission::Rejected(notice) => writeln!(out, "{}", notice)?,
            },
            Command::Remove(id) => {
                if self.store.remove(id) {
                    writeln!(out, "Removed #{}", id)?;
                    self.after_change(out)?;
                } else {
                    writeln!(out, "No goal #{}", id)?;
                }
            }
            Command::List => self.draw(out)?,
            Command::Count => writeln!(out, "{}", self.store.count())?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Blank => {}
            Command::InvalidId(arg) => writeln!(out, "Invalid id: {}", arg)?,
            Command::Unknown(word) => writeln!(out, "Unknown command: {} (try `help`)", word)?,
        }
        Ok(true)
    }

    #[cfg(test)]
    pub fn store(&self) -> &ObservedStore {
        &self.store
    }

    fn after_change(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.options.render_after_change {
            self.draw(out)?;
        }
        Ok(())
    }

    fn draw(&mut self, out: &mut impl Write) -> io::Result<()> {
        render::render(self.store.store(), &mut self.cache, out)
    }
}
