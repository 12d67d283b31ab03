use crate::error::CatalogError;
use crate::model::Card;
use crate::source::{CardSource, SearchIndex};
use nucard_domain::constants::SEARCH_HITS;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Resolves search index hits into canonical cards, keeping the index's ranking.
///
/// Hits are always resolved against the backing store, never the card cache.
#[derive(Debug, Clone)]
pub struct SearchMerger {
    index: Arc<dyn SearchIndex>,
    source: Arc<dyn CardSource>,
}

impl SearchMerger {
    pub fn new(index: Arc<dyn SearchIndex>, source: Arc<dyn CardSource>) -> Self {
        Self { index, source }
    }

    /// Returns up to ten cards matching `query`, most relevant first.
    ///
    /// Hits without a stored card are dropped.
    ///
    /// # Errors
    /// Any failure of the search index or the backing store; nothing is retried.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Card>, CatalogError> {
        let mut ids = self.index.query(query, SEARCH_HITS).await?;
        ids.truncate(SEARCH_HITS);
        if ids.is_empty() {
            debug!("Search index returned no hits");
            return Ok(Vec::new());
        }

        let cards: Vec<Card> =
            self.source.cards_by_ids(&ids).await?.into_iter().flatten().collect();

        let dropped = ids.len().saturating_sub(cards.len());
        if dropped > 0 {
            warn!(dropped, hits = ids.len(), "Search hits without a stored card were dropped");
        }
        debug!(cards = cards.len(), "Search resolved");

        Ok(cards)
    }
}
