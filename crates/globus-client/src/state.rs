//! Application state owned by the [`App`](crate::app::App) controller.

use chrono::{SecondsFormat, Utc};
use globus_shared::{CountryRecord, FavoriteEntry};

use crate::status::Status;

/// Where the country list is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The list is cached for the session.
    Ready,
    /// The last fetch failed; the next action retries.
    Failed,
}

/// Central application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The country on display; replaced on every selection.
    pub current: Option<CountryRecord>,

    /// Saved countries, newest first. Storage mirrors this list.
    pub favorites: Favorites,

    /// Content of the status line.
    pub status: Status,

    pub phase: LoadPhase,
}

impl AppState {
    pub fn new(favorites: Vec<FavoriteEntry>) -> Self {
        Self {
            favorites: Favorites::from_entries(favorites),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// Result of [`Favorites::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Ordered favorites list holding at most one entry per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    entries: Vec<FavoriteEntry>,
}

impl Favorites {
    /// Wrap an already-deduplicated list.
    pub fn from_entries(entries: Vec<FavoriteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|f| f.name == name)
    }

    /// Prepend `name` unless it is already saved.
    pub fn add(&mut self, name: &str, added_at: String) -> AddOutcome {
        if self.contains(name) {
            return AddOutcome::AlreadyPresent;
        }
        self.entries.insert(0, FavoriteEntry::new(name, added_at));
        AddOutcome::Added
    }

    /// Remove every entry called `name`, returning how many went.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|f| f.name != name);
        before - self.entries.len()
    }
}

/// Current time as ISO-8601 UTC with millisecond precision, e.g.
/// `2026-10-16T09:30:00.000Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
