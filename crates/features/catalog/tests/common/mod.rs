#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use nucard_catalog::{Card, CardSource, CatalogError, SearchIndex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory card source that counts fetches and can be slowed down or made to fail.
#[derive(Debug, Default)]
pub struct FakeSource {
    cards: Vec<Card>,
    latency: Duration,
    failures: AtomicUsize,
    full_fetches: AtomicUsize,
    batch_fetches: AtomicUsize,
}

impl FakeSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, ..Self::default() }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The next `count` full fetches fail.
    pub fn failing(self, count: usize) -> Self {
        self.failures.store(count, Ordering::SeqCst);
        self
    }

    pub fn full_fetches(&self) -> usize {
        self.full_fetches.load(Ordering::SeqCst)
    }

    pub fn batch_fetches(&self) -> usize {
        self.batch_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CardSource for FakeSource {
    async fn card(&self, id: &str) -> Result<Option<Card>, CatalogError> {
        Ok(self.cards.iter().find(|card| card.id == id).cloned())
    }

    async fn all_cards(&self) -> Result<Vec<Card>, CatalogError> {
        self.full_fetches.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let failing = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(CatalogError::from("card store offline"));
        }
        Ok(self.cards.clone())
    }

    async fn cards_by_ids(&self, ids: &[String]) -> Result<Vec<Option<Card>>, CatalogError> {
        self.batch_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(ids.iter().map(|id| self.cards.iter().find(|card| &card.id == id).cloned()).collect())
    }
}

/// Search index answering every query with the same ranked ids, ignoring `max_hits`.
#[derive(Debug, Default)]
pub struct FakeIndex {
    ids: Vec<String>,
    broken: bool,
    queries: AtomicUsize,
}

impl FakeIndex {
    pub fn returning(ids: &[&str]) -> Self {
        Self { ids: ids.iter().map(|&id| id.to_owned()).collect(), ..Self::default() }
    }

    pub fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchIndex for FakeIndex {
    async fn query(&self, _text: &str, _max_hits: usize) -> Result<Vec<String>, CatalogError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(CatalogError::from("search index unreachable"));
        }
        Ok(self.ids.clone())
    }
}

pub fn deck() -> Vec<Card> {
    vec![
        Card::new("ex1-004", "Fel Reaver").with_attribute("cost", 5),
        Card::new("cs2-029", "Fireball").with_faction("MAGE").with_attribute("cost", 4),
        Card::new("ex1-298", "Ragnaros the Firelord").with_attribute("cost", 8),
        Card::new("cs2-062", "Hellfire").with_faction("WARLOCK").with_attribute("cost", 4),
    ]
}
