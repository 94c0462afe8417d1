//! Session cache for the country list.

use globus_shared::RawCountry;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::error::NetError;
use crate::source::CountrySource;

/// Memoises the first successful fetch from a [`CountrySource`].
///
/// While a fetch is in flight, further callers wait on that same attempt
/// instead of issuing their own request. A failed attempt leaves the cache
/// empty, so the next call starts over.
pub struct CountryCatalog<S> {
    source: S,
    countries: OnceCell<Vec<RawCountry>>,
}

impl<S: CountrySource> CountryCatalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            countries: OnceCell::new(),
        }
    }

    /// Whether a list has already been fetched this session.
    pub fn is_loaded(&self) -> bool {
        self.countries.initialized()
    }

    /// The cached list, without fetching.
    pub fn cached(&self) -> Option<&[RawCountry]> {
        self.countries.get().map(Vec::as_slice)
    }

    /// Return the full list, fetching it on first use.
    pub async fn all(&self) -> Result<&[RawCountry], NetError> {
        if let Some(list) = self.cached() {
            debug!(count = list.len(), "Country list served from cache");
            return Ok(list);
        }

        let list = self
            .countries
            .get_or_try_init(|| async {
                let list = self.source.fetch_countries().await?;
                if list.is_empty() {
                    return Err(NetError::EmptyDataset);
                }
                info!(count = list.len(), "Country list loaded");
                Ok(list)
            })
            .await?;

        Ok(list.as_slice())
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
