use globus_net::CountrySource;
use globus_store::KeyValueStore;
use tracing::{debug, info, warn};

use crate::app::App;
use crate::state::{now_iso, AddOutcome};
use crate::status::Status;

impl<S: CountrySource, K: KeyValueStore> App<S, K> {
    /// Save the current country.
    ///
    /// Returns `None` when no country is on display. An already saved name
    /// leaves the list and storage untouched and only updates the status.
    pub fn add_favorite(&mut self) -> Option<AddOutcome> {
        let Some(country) = self.state.current.as_ref() else {
            debug!("Add to favorites ignored: nothing selected");
            return None;
        };
        let name = country.name.clone();
        let text = self.locale.messages();

        let outcome = self.state.favorites.add(&name, now_iso());
        match outcome {
            AddOutcome::AlreadyPresent => {
                self.state.status = Status::error(text.already_favorited);
            }
            AddOutcome::Added => {
                self.store.save(self.state.favorites.entries());
                info!(name = %name, total = self.state.favorites.len(), "Favorite added");
                self.state.status = Status::info(text.added(&name));
            }
        }
        Some(outcome)
    }

    /// Remove every favorite called `name`; returns how many were removed.
    pub fn remove_favorite(&mut self, name: &str) -> usize {
        let removed = self.state.favorites.remove(name);
        if removed == 0 {
            warn!(name, "Remove ignored: no such favorite");
            return 0;
        }

        self.store.save(self.state.favorites.entries());
        info!(name, total = self.state.favorites.len(), "Favorite removed");
        self.state.status = Status::info(self.locale.messages().removed(name));
        removed
    }
}
