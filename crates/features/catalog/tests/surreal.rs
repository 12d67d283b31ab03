#![cfg(feature = "server")]

use nucard_catalog::{CardSource, SurrealCardSource};
use nucard_database::Database;

async fn seeded() -> SurrealCardSource {
    let db = Database::builder().url("mem://").session("nucard", "catalog").init().await.unwrap();
    db.query(
        "CREATE card:felreaver CONTENT { name: 'Fel Reaver', cost: 5 };
         CREATE card:fireball CONTENT { name: 'Fireball', factionId: 'MAGE', cost: 4 };
         CREATE card:hellfire CONTENT { name: 'Hellfire', factionId: 'WARLOCK', cost: 4 };
         CREATE card:⟨ex1-298⟩ CONTENT { name: 'Ragnaros the Firelord', cost: 8 };
         CREATE deck:fireball CONTENT { name: 'Big Spells' };",
    )
    .await
    .unwrap()
    .check()
    .unwrap();

    SurrealCardSource::new(db)
}

#[tokio::test]
async fn record_key_becomes_the_card_id() {
    let source = seeded().await;

    let card = source.card("fireball").await.unwrap().unwrap();

    assert_eq!(card.id, "fireball");
    assert_eq!(card.name, "Fireball");
    assert_eq!(card.faction_id.as_deref(), Some("MAGE"));
    assert_eq!(card.extra["cost"], 4);
    assert!(source.card("murloc").await.unwrap().is_none());
}

#[tokio::test]
async fn all_cards_returns_the_collection() {
    let source = seeded().await;

    let mut ids: Vec<String> =
        source.all_cards().await.unwrap().into_iter().map(|card| card.id).collect();
    ids.sort();

    assert_eq!(ids, ["ex1-298", "felreaver", "fireball", "hellfire"]);
}

#[tokio::test]
async fn batched_fetch_follows_request_order() {
    let source = seeded().await;
    let ids = ["hellfire", "murloc", "felreaver"].map(str::to_owned);

    let cards = source.cards_by_ids(&ids).await.unwrap();

    let names: Vec<Option<&str>> =
        cards.iter().map(|card| card.as_ref().map(|c| c.name.as_str())).collect();
    assert_eq!(names, [Some("Hellfire"), None, Some("Fel Reaver")]);
    assert!(source.cards_by_ids(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn keyed_lookup_stays_in_the_card_table() {
    let source = seeded().await;

    let dashed = source.card("ex1-298").await.unwrap().unwrap();
    assert_eq!(dashed.id, "ex1-298");
    assert_eq!(dashed.name, "Ragnaros the Firelord");

    let ids = ["fireball", "ex1-298", "fireball"].map(str::to_owned);
    let names: Vec<Option<String>> = source
        .cards_by_ids(&ids)
        .await
        .unwrap()
        .into_iter()
        .map(|card| card.map(|c| c.name))
        .collect();
    assert_eq!(
        names,
        [
            Some("Fireball".to_owned()),
            Some("Ragnaros the Firelord".to_owned()),
            Some("Fireball".to_owned())
        ]
    );
}
