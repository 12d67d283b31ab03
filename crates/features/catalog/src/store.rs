//! Process-lifetime cache over the canonical card collection.
//!
//! The cache is filled on first use with one fetch of the whole collection. Concurrent
//! first callers share that fetch; a failed fetch leaves the cache empty so the next call
//! tries again. Once filled the cache never changes and is read without locking.

use crate::error::CatalogError;
use crate::model::Card;
use crate::source::CardSource;
use fxhash::FxHashMap;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
struct CardCache {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl CardCache {
    /// Keeps the first card for every id and drops cards without one.
    fn from_records(records: Vec<Card>) -> Self {
        let mut cards = Vec::with_capacity(records.len());
        let mut index = FxHashMap::default();
        let (mut unnamed, mut duplicates) = (0_usize, 0_usize);

        for card in records {
            if card.id.is_empty() {
                unnamed += 1;
                continue;
            }
            if index.contains_key(&card.id) {
                warn!(id = %card.id, "Duplicate card id, keeping the first record");
                duplicates += 1;
                continue;
            }
            index.insert(card.id.clone(), cards.len());
            cards.push(card);
        }

        if unnamed > 0 {
            warn!(skipped = unnamed, "Cards without an id were not cached");
        }
        info!(cards = cards.len(), duplicates, "Card cache hydrated");

        Self { cards, index }
    }

    fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }
}

#[derive(Debug)]
struct CardStoreInner {
    source: Arc<dyn CardSource>,
    cache: OnceCell<CardCache>,
}

/// Cache-backed access to the card collection. Cheap to clone; clones share the cache.
#[derive(Debug, Clone)]
pub struct CardStore {
    inner: Arc<CardStoreInner>,
}

impl CardStore {
    pub fn new(source: Arc<dyn CardSource>) -> Self {
        Self { inner: Arc::new(CardStoreInner { source, cache: OnceCell::new() }) }
    }

    /// Fills the cache unless it already is.
    ///
    /// # Errors
    /// Propagates the backing store failure; the cache stays empty and a later call retries.
    #[instrument(skip(self))]
    pub async fn ensure_hydrated(&self) -> Result<(), CatalogError> {
        self.cache().await.map(|_| ())
    }

    /// Returns the cached card with `id`.
    ///
    /// # Errors
    /// * [`CatalogError::NotFound`] if no cached card has this id.
    /// * Any hydration failure, see [`ensure_hydrated`](Self::ensure_hydrated).
    #[instrument(skip(self))]
    pub async fn card(&self, id: &str) -> Result<Card, CatalogError> {
        self.cache()
            .await?
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(format!("card:{id}")))
    }

    /// Returns a uniformly random cached card, or `None` when the collection is empty.
    ///
    /// # Errors
    /// Any hydration failure, see [`ensure_hydrated`](Self::ensure_hydrated).
    #[instrument(skip(self))]
    pub async fn random_card(&self) -> Result<Option<Card>, CatalogError> {
        let cache = self.cache().await?;
        if cache.cards.is_empty() {
            debug!("Random card requested from an empty collection");
            return Ok(None);
        }

        Ok(cache.cards.choose(&mut rand::rng()).cloned())
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.inner.cache.initialized()
    }

    /// Number of cached cards; zero until hydrated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.cache.get().map_or(0, |cache| cache.cards.len())
    }

    async fn cache(&self) -> Result<&CardCache, CatalogError> {
        self.inner
            .cache
            .get_or_try_init(|| async {
                info!("Hydrating card cache");
                let records = self.inner.source.all_cards().await?;
                Ok::<_, CatalogError>(CardCache::from_records(records))
            })
            .await
    }
}
