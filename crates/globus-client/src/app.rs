//! The controller: owns the state and every collaborator.
//!
//! Operations live in [`crate::commands`], split by concern, each as an
//! `impl App` block.

use globus_net::{CountryCatalog, CountrySource};
use globus_shared::Locale;
use globus_store::{FavoritesStore, KeyValueStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::events::{Action, ViewSink};
use crate::state::AppState;
use crate::status::Status;
use crate::view::{render, ViewTree};

pub struct App<S, K> {
    pub(crate) state: AppState,
    pub(crate) catalog: CountryCatalog<S>,
    pub(crate) store: FavoritesStore<K>,
    pub(crate) locale: Locale,
    pub(crate) rng: StdRng,
}

impl<S: CountrySource, K: KeyValueStore> App<S, K> {
    /// Build the controller and load favorites from storage.
    pub fn new(source: S, kv: K, locale: Locale) -> Self {
        let store = FavoritesStore::new(kv);
        let favorites = store.load();
        info!(favorites = favorites.len(), %locale, "Application state initialised");

        Self {
            state: AppState::new(favorites),
            catalog: CountryCatalog::new(source),
            store,
            locale,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &CountryCatalog<S> {
        &self.catalog
    }

    pub fn store(&self) -> &FavoritesStore<K> {
        &self.store
    }

    /// Render the current state.
    pub fn view(&self) -> ViewTree {
        render(&self.state, self.locale)
    }

    /// Overwrite the status line.
    pub fn show_message(&mut self, status: Status) {
        self.state.status = status;
    }

    /// First paint, greeting, then a best-effort prefetch of the list.
    pub async fn start(&mut self, sink: &mut impl ViewSink) {
        self.show_message(Status::info(self.locale.messages().ready));
        sink.show(&self.view());

        if let Err(e) = self.ensure_catalog(sink).await {
            warn!(error = %e, "Could not prefetch the country list");
        }
        sink.show(&self.view());
    }

    /// Route a UI action to its operation and re-render.
    pub async fn dispatch(&mut self, action: Action, sink: &mut impl ViewSink) {
        match action {
            Action::GetCountry => {
                self.get_country(sink).await;
            }
            Action::AddFavorite => {
                self.add_favorite();
            }
            Action::RemoveFavorite(name) => {
                self.remove_favorite(&name);
            }
        }
        sink.show(&self.view());
    }
}
