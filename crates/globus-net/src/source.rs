//! Where the country list comes from.

use std::future::Future;

use globus_shared::constants::DEFAULT_API_URL;
use globus_shared::RawCountry;
use tracing::debug;

use crate::error::NetError;

/// A single-shot provider of the full country list.
///
/// Implementations make exactly one attempt per call: no retry, no backoff.
pub trait CountrySource {
    fn fetch_countries(&self) -> impl Future<Output = Result<Vec<RawCountry>, NetError>> + Send;
}

/// Fetches the list over HTTP with `reqwest`, using transport defaults.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl CountrySource for HttpSource {
    async fn fetch_countries(&self) -> Result<Vec<RawCountry>, NetError> {
        debug!(url = %self.url, "Requesting country list");

        let resp = self.client.get(&self.url).send().await?;

        if !resp.status().is_success() {
            return Err(NetError::Status(resp.status().as_u16()));
        }

        let body = resp.bytes().await?;
        let countries: Vec<RawCountry> =
            serde_json::from_slice(&body).map_err(|e| NetError::Decode(e.to_string()))?;

        debug!(count = countries.len(), bytes = body.len(), "Country list received");
        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_server() -> String {
        let app = Router::new()
            .route(
                "/all",
                get(|| async {
                    Json(json!([
                        { "name": { "common": "Japan" }, "capital": ["Tokyo"] },
                        { "name": { "common": "Peru" }, "capital": ["Lima"] }
                    ]))
                }),
            )
            .route("/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/object", get(|| async { Json(json!({ "status": 404 })) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = spawn_server().await;
        let source = HttpSource::new(format!("{base}/all"));

        let countries = source.fetch_countries().await.unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].common_name(), Some("Japan"));
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let base = spawn_server().await;
        let source = HttpSource::new(format!("{base}/down"));

        let err = source.fetch_countries().await.unwrap_err();
        assert!(matches!(err, NetError::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_array_body() {
        let base = spawn_server().await;
        let source = HttpSource::new(format!("{base}/object"));

        let err = source.fetch_countries().await.unwrap_err();
        assert!(matches!(err, NetError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpSource::new(format!("http://{addr}/all"));
        let err = source.fetch_countries().await.unwrap_err();
        assert!(matches!(err, NetError::Transport(_)));
    }
}
