//! Backends the catalog reads from.

use crate::error::CatalogError;
use crate::model::Card;
use async_trait::async_trait;
use std::fmt::Debug;

/// Canonical card storage.
#[async_trait]
pub trait CardSource: Debug + Send + Sync {
    /// Fetches one card by id straight from storage.
    ///
    /// [`CardStore`](crate::CardStore) never calls this: once hydrated it answers lookups
    /// from its cache. It serves callers that need the stored record regardless of the cache.
    async fn card(&self, id: &str) -> Result<Option<Card>, CatalogError>;

    /// Fetches the whole collection.
    async fn all_cards(&self) -> Result<Vec<Card>, CatalogError>;

    /// Fetches several cards in one round trip.
    ///
    /// The result has one slot per requested id, in request order; `None` marks an id with
    /// no stored card.
    async fn cards_by_ids(&self, ids: &[String]) -> Result<Vec<Option<Card>>, CatalogError>;
}

/// A relevance-ranked full-text index over the cards.
#[async_trait]
pub trait SearchIndex: Debug + Send + Sync {
    /// Returns at most `max_hits` card ids, most relevant first.
    async fn query(&self, text: &str, max_hits: usize) -> Result<Vec<String>, CatalogError>;
}

#[cfg(feature = "server")]
#[async_trait]
impl SearchIndex for nucard_search::SearchClient {
    async fn query(&self, text: &str, max_hits: usize) -> Result<Vec<String>, CatalogError> {
        Ok(Self::query(self, text, max_hits).await?)
    }
}
