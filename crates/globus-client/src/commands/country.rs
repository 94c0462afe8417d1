use globus_net::{CountrySource, NetError};
use globus_shared::select::pick_random;
use globus_store::KeyValueStore;
use tracing::{debug, error};

use crate::app::App;
use crate::events::ViewSink;
use crate::state::LoadPhase;
use crate::status::Status;

impl<S: CountrySource, K: KeyValueStore> App<S, K> {
    /// Make sure the country list is cached, fetching it if necessary.
    ///
    /// A fetch that actually starts shows the loading message (and renders
    /// it), clears the status on success and shows the failure message
    /// otherwise. A cached list touches nothing.
    pub async fn ensure_catalog(&mut self, sink: &mut impl ViewSink) -> Result<(), NetError> {
        if self.catalog.is_loaded() {
            return Ok(());
        }
        let text = self.locale.messages();

        self.state.phase = LoadPhase::Loading;
        self.state.status = Status::info(text.loading);
        sink.show(&self.view());

        match self.catalog.all().await {
            Ok(_) => {
                self.state.phase = LoadPhase::Ready;
                self.state.status = Status::info("");
                Ok(())
            }
            Err(e) => {
                self.state.phase = LoadPhase::Failed;
                self.state.status = Status::error(text.fetch_failed);
                Err(e)
            }
        }
    }

    /// Replace the current country with a random one from the list.
    ///
    /// On fetch failure the current country is left as it was.
    pub async fn get_country(&mut self, sink: &mut impl ViewSink) {
        if let Err(e) = self.ensure_catalog(sink).await {
            error!(error = %e, "Failed to load the country list");
            return;
        }

        let Some(list) = self.catalog.cached() else {
            return;
        };
        let Some(raw) = pick_random(list, &mut self.rng) else {
            return;
        };

        let country = raw.normalize(self.locale);
        debug!(name = %country.name, "Selected country");
        self.state.current = Some(country);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::commands::testing::{countries, FakeSource};
    use crate::events::{Action, LastView};
    use crate::state::LoadPhase;
    use crate::view::{COUNTRY_BLOCK_ID, MESSAGE_ID};
    use globus_net::NetError;
    use globus_shared::Locale;
    use globus_store::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app(script: Vec<Result<Vec<globus_shared::RawCountry>, NetError>>) -> App<FakeSource, MemoryStore> {
        App::new(FakeSource::new(script), MemoryStore::new(), Locale::En)
            .with_rng(StdRng::seed_from_u64(3))
    }

    #[tokio::test]
    async fn test_get_country_always_from_list() {
        let names = ["Japan", "Peru", "Chad"];
        let mut app = app(vec![Ok(countries(&names))]);
        let mut sink = LastView::default();

        for _ in 0..10 {
            app.dispatch(Action::GetCountry, &mut sink).await;
            let shown = app.state().current.as_ref().unwrap();
            assert!(names.contains(&shown.name.as_str()));

            let view = sink.view.as_ref().unwrap();
            let block = view.region(COUNTRY_BLOCK_ID).unwrap().text_content();
            assert!(block.contains(&shown.name));
        }
        assert_eq!(app.catalog().source().calls(), 1);
        assert_eq!(app.state().phase, LoadPhase::Ready);
    }

    #[tokio::test]
    async fn test_loading_message_then_cleared() {
        let mut app = app(vec![Ok(countries(&["Japan"]))]);
        let mut sink = LastView::default();

        app.dispatch(Action::GetCountry, &mut sink).await;

        // loading render + final render
        assert_eq!(sink.renders, 2);
        assert!(app.state().status.text.is_empty());
        assert_eq!(app.state().current.as_ref().unwrap().capital, "Japan City");
    }

    #[tokio::test]
    async fn test_cached_selection_keeps_status() {
        let mut app = app(vec![Ok(countries(&["Japan"]))]);
        let mut sink = LastView::default();
        app.dispatch(Action::GetCountry, &mut sink).await;
        app.dispatch(Action::AddFavorite, &mut sink).await;

        app.dispatch(Action::GetCountry, &mut sink).await;
        assert_eq!(
            app.state().status.text,
            Locale::En.messages().added("Japan")
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_country_unchanged() {
        let mut app = app(vec![Ok(countries(&["Japan"]))]);
        let mut sink = LastView::default();
        app.dispatch(Action::GetCountry, &mut sink).await;
        let before = app.state().current.clone();

        let mut failing = self::app(vec![Err(NetError::Status(503))]);
        failing.state.current = before.clone();
        failing.dispatch(Action::GetCountry, &mut sink).await;

        assert_eq!(failing.state().current, before);
        assert_eq!(failing.state().phase, LoadPhase::Failed);
        assert!(failing.state().status.is_error());

        let view = sink.view.as_ref().unwrap();
        let message = view.region(MESSAGE_ID).unwrap();
        assert_eq!(message.text_content(), Locale::En.messages().fetch_failed);
        assert!(view
            .region(COUNTRY_BLOCK_ID)
            .unwrap()
            .text_content()
            .contains("Japan"));
    }

    #[tokio::test]
    async fn test_failure_self_heals_on_next_action() {
        let mut app = app(vec![Err(NetError::Status(502)), Ok(countries(&["Peru"]))]);
        let mut sink = LastView::default();

        app.dispatch(Action::GetCountry, &mut sink).await;
        assert!(app.state().current.is_none());

        app.dispatch(Action::GetCountry, &mut sink).await;
        assert_eq!(app.state().current.as_ref().unwrap().name, "Peru");
        assert_eq!(app.catalog().source().calls(), 2);
    }

    #[tokio::test]
    async fn test_start_prefetches_once() {
        let mut app = app(vec![Ok(countries(&["Japan", "Peru"]))]);
        let mut sink = LastView::default();

        app.start(&mut sink).await;
        assert!(app.catalog().is_loaded());

        app.dispatch(Action::GetCountry, &mut sink).await;
        assert_eq!(app.catalog().source().calls(), 1);
    }

    #[tokio::test]
    async fn test_start_survives_prefetch_failure() {
        let mut app = app(vec![Err(NetError::Status(500))]);
        let mut sink = LastView::default();

        app.start(&mut sink).await;

        assert_eq!(app.state().phase, LoadPhase::Failed);
        assert!(app.state().status.is_error());
        assert!(sink.view.is_some());
    }
}
