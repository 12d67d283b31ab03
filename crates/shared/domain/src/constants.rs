//! Shared identifiers used across slices.

/// `SurrealDB` table holding canonical card records.
pub const CARD_TABLE: &str = "card";

/// Default name of the external search index.
pub const CARD_INDEX: &str = "cards";

/// Maximum number of hits requested from the search index per query.
pub const SEARCH_HITS: usize = 10;

/// `OpenAPI` tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";

/// `OpenAPI` tag for catalog endpoints.
pub const CATALOG_TAG: &str = "Catalog";
