use crate::error::CatalogError;
use crate::model::Card;
use crate::source::CardSource;
use async_trait::async_trait;
use fxhash::FxHashMap;
use nucard_database::{Database, DatabaseErrorExt, RecordId};
use nucard_domain::constants::CARD_TABLE;
use serde_json::Value;
use tracing::{instrument, warn};

/// [`CardSource`] over the `card` table; the record key is the card id.
#[derive(Debug, Clone)]
pub struct SurrealCardSource {
    db: Database,
}

impl SurrealCardSource {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Selects from `target`, either the table or the bound `$ids` record list.
    async fn select(
        &self,
        target: &str,
        ids: Option<Vec<RecordId>>,
        context: &'static str,
    ) -> Result<Vec<Card>, CatalogError> {
        let query = self.db.query(format!("SELECT *, id.id() AS id FROM {target}"));
        let query = match ids {
            Some(ids) => query.bind(("ids", ids)),
            None => query,
        };
        let mut response = query.await.context(context)?;
        let rows: Vec<Value> = response.take(0).context(context)?;

        Ok(rows.into_iter().filter_map(parse_card).collect())
    }

    /// Keyed lookup of `card:<id>` records; missing records yield no row.
    async fn select_ids(
        &self,
        ids: &[String],
        context: &'static str,
    ) -> Result<Vec<Card>, CatalogError> {
        let ids = ids.iter().map(|id| RecordId::new(CARD_TABLE, id.as_str())).collect();
        self.select("$ids", Some(ids), context).await
    }
}

fn parse_card(row: Value) -> Option<Card> {
    match serde_json::from_value::<Card>(row) {
        Ok(card) => Some(card),
        Err(e) => {
            warn!(error = %e, "Skipping malformed card record");
            None
        }
    }
}

#[async_trait]
impl CardSource for SurrealCardSource {
    #[instrument(skip(self))]
    async fn card(&self, id: &str) -> Result<Option<Card>, CatalogError> {
        let cards = self.select_ids(&[id.to_owned()], "Selecting card").await?;
        Ok(cards.into_iter().next())
    }

    #[instrument(skip(self))]
    async fn all_cards(&self) -> Result<Vec<Card>, CatalogError> {
        self.select(CARD_TABLE, None, "Selecting all cards").await
    }

    #[instrument(skip(self))]
    async fn cards_by_ids(&self, ids: &[String]) -> Result<Vec<Option<Card>>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.select_ids(ids, "Selecting cards by id").await?;
        let by_id: FxHashMap<String, Card> =
            found.into_iter().map(|card| (card.id.clone(), card)).collect();

        Ok(ids.iter().map(|id| by_id.get(id).cloned()).collect())
    }
}
