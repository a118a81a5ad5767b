//! High score table.
//!
//! A fixed-capacity list of the best ten `(name, score)` pairs, highest
//! first, stored as JSON between runs. A missing or unreadable file is not an
//! error for the game: it just starts from the default table.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

pub use tui_bomber_types as types;

use crate::types::{DEFAULT_PLAYER_NAME, MAX_NAME_LEN, MAX_SCORES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    /// Build an entry, truncating the name to the stored maximum.
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: truncate_name(name),
            score,
        }
    }
}

impl Default for ScoreEntry {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME, 0)
    }
}

/// Clip `name` to [`MAX_NAME_LEN`] characters.
pub fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}

/// Always holds exactly [`MAX_SCORES`] entries sorted by score, descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    entries: ArrayVec<ScoreEntry, MAX_SCORES>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::from_entries(std::iter::empty())
    }
}

impl ScoreTable {
    /// Normalize arbitrary entries into a table: sorted, truncated to
    /// capacity and padded with default entries.
    pub fn from_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> Self {
        let mut all: Vec<ScoreEntry> = entries
            .into_iter()
            .map(|e| ScoreEntry::new(&e.name, e.score))
            .collect();
        // Stable, so equal scores keep their stored order.
        all.sort_by(|a, b| b.score.cmp(&a.score));

        let mut table = ArrayVec::new();
        for entry in all.into_iter().take(MAX_SCORES) {
            table.push(entry);
        }
        while !table.is_full() {
            table.push(ScoreEntry::default());
        }
        Self { entries: table }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Lowest retained score.
    pub fn lowest(&self) -> u32 {
        self.entries.last().map(|e| e.score).unwrap_or(0)
    }

    /// Whether `score` would enter the table.
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.lowest()
    }

    /// Insert a result, returning its rank (0-based) if it made the table.
    ///
    /// Lower entries slide down one place and the last one falls off.
    pub fn insert(&mut self, name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        if self.entries.is_full() {
            self.entries.pop();
        }
        self.entries.insert(rank, ScoreEntry::new(name, score));
        Some(rank)
    }

    /// Parse a table from its JSON form.
    pub fn from_json(text: &str) -> Result<Self> {
        let entries: Vec<ScoreEntry> =
            serde_json::from_str(text).context("invalid score table JSON")?;
        Ok(Self::from_entries(entries))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.entries())?)
    }
}

/// Score table bound to a file on disk.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    table: ScoreTable,
}

impl ScoreStore {
    /// Load the table at `path`, falling back to the default table.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table = match load(&path) {
            Ok(table) => table,
            Err(err) => {
                log::warn!("using default score table: {err:#}");
                ScoreTable::default()
            }
        };
        Self { path, table }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Record a finished round and persist the table if it changed.
    pub fn submit(&mut self, name: &str, score: u32) -> Result<Option<usize>> {
        let rank = self.table.insert(name, score);
        match rank {
            Some(rank) => {
                log::info!("score {score} for {name} entered the table at #{}", rank + 1);
                self.save()?;
            }
            None => log::debug!("score {score} below table minimum {}", self.table.lowest()),
        }
        Ok(rank)
    }

    pub fn save(&self) -> Result<()> {
        let json = self.table.to_json()?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write scores to {}", self.path.display()))
    }
}

fn load(path: &Path) -> Result<ScoreTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ScoreTable::from_json(&text)
}
