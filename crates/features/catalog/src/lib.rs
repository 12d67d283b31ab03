//! Card catalog feature slice.
//!
//! Serves canonical card records from a lazily hydrated, process-lifetime cache, merges
//! relevance-ranked hits of an external search index with the backing store, and derives
//! static faction metadata and third-party reference links.

#[cfg(feature = "server")]
pub mod api;
mod error;
pub mod factions;
pub mod links;
mod model;
mod search;
mod source;
mod store;
#[cfg(feature = "server")]
mod surreal;

pub use error::{CatalogError, CatalogErrorExt};
pub use model::{Card, ErrorResponse, ExternalInfoProvider, Faction};
pub use search::SearchMerger;
pub use source::{CardSource, SearchIndex};
pub use store::CardStore;
#[cfg(feature = "server")]
pub use surreal::SurrealCardSource;

use std::sync::Arc;

/// Catalog feature state.
#[nucard_derive::nucard_slice]
pub struct Catalog {
    pub store: CardStore,
    pub search: SearchMerger,
}

impl Catalog {
    /// Wires the store and the search merger over the same card source.
    pub fn from_backends(source: Arc<dyn CardSource>, index: Arc<dyn SearchIndex>) -> Self {
        Self::new(CatalogInner {
            store: CardStore::new(Arc::clone(&source)),
            search: SearchMerger::new(index, source),
        })
    }
}

/// Initialize the catalog feature over the configured database and search index.
///
/// The card cache is not touched here; it hydrates on the first lookup.
///
/// # Errors
/// Returns [`CatalogError::Search`] if the search client settings are invalid.
#[cfg(feature = "server")]
pub fn init(
    config: &nucard_kernel::domain::config::ApiConfig,
    database: &nucard_database::Database,
) -> Result<nucard_kernel::domain::registry::InitializedSlice, CatalogError> {
    let search = &config.search;
    let mut client = nucard_search::SearchClient::builder()
        .app_id(&search.app_id)
        .api_key(&search.api_key)
        .index(&search.index);
    if let Some(host) = &search.host {
        client = client.host(host);
    }
    let client = client.build().context("Configuring search index")?;

    let source = Arc::new(SurrealCardSource::new(database.clone()));
    let catalog = Catalog::from_backends(source, Arc::new(client));

    tracing::info!(index = %search.index, "Catalog slice initialized");
    Ok(nucard_kernel::domain::registry::InitializedSlice::new(catalog))
}
