//! # Search Index Client
//!
//! A thin, awaitable client for the Algolia REST API that returns the identifiers of the most
//! relevant records for a free-text query, in the index's own ranking order. Scoring is
//! entirely the index's business: this crate never reorders or filters hits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nucard_search::{SearchClient, SearchError};
//!
//! # async fn example() -> Result<(), SearchError> {
//! let client = SearchClient::builder()
//!     .app_id("APPID")
//!     .api_key("search-only-key")
//!     .index("cards")
//!     .build()?;
//!
//! let ids = client.query("fel reaver", 10).await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::{SearchError, SearchErrorExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

const APP_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    query: &'a str,
    hits_per_page: usize,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "objectID")]
    object_id: String,
}

#[derive(Debug)]
struct SearchClientInner {
    http: Client,
    endpoint: String,
    app_id: String,
    api_key: String,
}

/// Handle to one search index. Cheap to clone; clones share the HTTP connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    inner: Arc<SearchClientInner>,
}

impl SearchClient {
    /// Creates a new [`SearchClientBuilder`].
    pub fn builder() -> SearchClientBuilder {
        SearchClientBuilder::default()
    }

    /// Full URL of the query endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Returns the object ids of at most `max_hits` records matching `text`, most relevant first.
    ///
    /// # Errors
    /// * [`SearchError::Http`] if the request cannot be sent or the body cannot be decoded.
    /// * [`SearchError::Status`] if the index answers with a non-success status.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn query(&self, text: &str, max_hits: usize) -> Result<Vec<String>, SearchError> {
        let response = self
            .inner
            .http
            .post(&self.inner.endpoint)
            .header(APP_ID_HEADER, &self.inner.app_id)
            .header(API_KEY_HEADER, &self.inner.api_key)
            .json(&QueryRequest { query: text, hits_per_page: max_hits })
            .send()
            .await
            .context("Sending search query")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                message: body.into(),
                context: Some("Querying search index".into()),
            });
        }

        let body: QueryResponse = response.json().await.context("Decoding search hits")?;
        let ids: Vec<String> =
            body.hits.into_iter().take(max_hits).map(|hit| hit.object_id).collect();

        debug!(hits = ids.len(), "Search index answered");
        Ok(ids)
    }
}

/// A fluent builder for [`SearchClient`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct SearchClientBuilder {
    app_id: Option<String>,
    api_key: Option<String>,
    index: Option<String>,
    host: Option<String>,
}

impl SearchClientBuilder {
    /// Sets the Algolia application id.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Sets the API key sent with every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the index name.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Overrides the base URL (defaults to `https://{app_id}-dsn.algolia.net`).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Validates the settings and creates the client.
    ///
    /// # Errors
    /// * [`SearchError::Config`] if the app id, API key, or index is missing or blank, or the
    ///   index name contains a `/`.
    /// * [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<SearchClient, SearchError> {
        let app_id = required(self.app_id, "app_id")?;
        let api_key = required(self.api_key, "api_key")?;
        let index = required(self.index, "index")?;
        if index.contains('/') {
            return Err(SearchError::Config {
                message: format!("Invalid index name '{index}'").into(),
                context: None,
            });
        }

        let base = self.host.map_or_else(
            || format!("https://{}-dsn.algolia.net", app_id.to_lowercase()),
            |host| host.trim_end_matches('/').to_owned(),
        );
        let endpoint = format!("{base}/1/indexes/{index}/query");

        let http = Client::builder().build().context("Building HTTP client")?;

        Ok(SearchClient { inner: Arc::new(SearchClientInner { http, endpoint, app_id, api_key }) })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, SearchError> {
    value.filter(|v| !v.trim().is_empty()).ok_or_else(|| SearchError::Config {
        message: format!("{name} is required").into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_uses_dsn_host() {
        let client =
            SearchClient::builder().app_id("ABC123").api_key("key").index("cards").build().unwrap();

        assert_eq!(client.endpoint(), "https://abc123-dsn.algolia.net/1/indexes/cards/query");
    }

    #[test]
    fn host_override_drops_trailing_slash() {
        let client = SearchClient::builder()
            .app_id("ABC")
            .api_key("key")
            .index("cards")
            .host("http://127.0.0.1:7700/")
            .build()
            .unwrap();

        assert_eq!(client.endpoint(), "http://127.0.0.1:7700/1/indexes/cards/query");
    }

    #[test]
    fn blank_settings_are_rejected() {
        let err = SearchClient::builder().app_id("  ").api_key("key").index("cards").build();
        assert!(matches!(err, Err(SearchError::Config { .. })));

        let err = SearchClient::builder().app_id("ABC").index("cards").build();
        assert!(matches!(err, Err(SearchError::Config { .. })));

        let err = SearchClient::builder().app_id("ABC").api_key("key").index("a/b").build();
        assert!(matches!(err, Err(SearchError::Config { .. })));
    }

    #[test]
    fn request_body_uses_algolia_field_names() {
        let body = serde_json::to_value(QueryRequest { query: "fel", hits_per_page: 10 }).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "fel", "hitsPerPage": 10 }));
    }
}
