mod common;

use common::{FakeIndex, FakeSource, deck};
use nucard_catalog::{Card, Catalog, CatalogError, SearchMerger};
use std::sync::Arc;

fn names(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|card| card.name.as_str()).collect()
}

#[tokio::test]
async fn keeps_index_order() {
    let index = Arc::new(FakeIndex::returning(&["cs2-062", "ex1-004", "cs2-029"]));
    let merger = SearchMerger::new(index, Arc::new(FakeSource::new(deck())));

    let cards = merger.search("fire").await.unwrap();

    assert_eq!(names(&cards), ["Hellfire", "Fel Reaver", "Fireball"]);
}

#[tokio::test]
async fn unresolved_hits_are_dropped() {
    let index = Arc::new(FakeIndex::returning(&["gone-1", "ex1-298", "gone-2", "ex1-004"]));
    let merger = SearchMerger::new(index, Arc::new(FakeSource::new(deck())));

    let cards = merger.search("ra").await.unwrap();

    assert_eq!(names(&cards), ["Ragnaros the Firelord", "Fel Reaver"]);
}

#[tokio::test]
async fn at_most_ten_results() {
    let cards: Vec<Card> = (0..15).map(|i| Card::new(format!("c{i:02}"), format!("Card {i}"))).collect();
    let ids: Vec<String> = cards.iter().rev().map(|card| card.id.clone()).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    let merger =
        SearchMerger::new(Arc::new(FakeIndex::returning(&ids)), Arc::new(FakeSource::new(cards)));

    let found = merger.search("card").await.unwrap();

    assert_eq!(found.len(), 10);
    assert_eq!(found[0].id, "c14");
    assert_eq!(found[9].id, "c05");
}

#[tokio::test]
async fn no_hits_skips_the_store() {
    let source = Arc::new(FakeSource::new(deck()));
    let merger = SearchMerger::new(Arc::new(FakeIndex::returning(&[])), source.clone());

    assert!(merger.search("murloc").await.unwrap().is_empty());
    assert_eq!(source.batch_fetches(), 0);
}

#[tokio::test]
async fn index_failure_fails_the_search() {
    let source = Arc::new(FakeSource::new(deck()));
    let merger = SearchMerger::new(Arc::new(FakeIndex::broken()), source.clone());

    let err = merger.search("fel").await.unwrap_err();

    assert!(matches!(err, CatalogError::Internal { .. }));
    assert_eq!(source.batch_fetches(), 0);
}

#[tokio::test]
async fn search_does_not_hydrate_the_cache() {
    let source = Arc::new(FakeSource::new(deck()));
    let index = Arc::new(FakeIndex::returning(&["ex1-004"]));
    let catalog = Catalog::from_backends(source.clone(), index.clone());

    let cards = catalog.search.search("fel").await.unwrap();

    assert_eq!(names(&cards), ["Fel Reaver"]);
    assert_eq!(index.queries(), 1);
    assert_eq!(source.batch_fetches(), 1);
    assert_eq!(source.full_fetches(), 0);
    assert!(!catalog.store.is_hydrated());
}
