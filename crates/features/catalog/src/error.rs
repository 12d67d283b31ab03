use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[nucard_derive::nucard_error]
pub enum CatalogError {
    /// No card with the requested id, or no search hit resolved to a card.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Random selection over an empty collection.
    #[error("Empty collection{}: {message}", format_context(.context))]
    EmptyCollection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The backing store failed.
    #[cfg(feature = "server")]
    #[error("Card store error{}: {source}", format_context(.context))]
    Database { source: nucard_database::DatabaseError, context: Option<Cow<'static, str>> },
    /// The external search index failed.
    #[cfg(feature = "server")]
    #[error("Search index error{}: {source}", format_context(.context))]
    Search { source: nucard_search::SearchError, context: Option<Cow<'static, str>> },
    /// Upstream failures of other backends and logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    /// Stable machine-readable kind, rendered as the `error` field of HTTP error bodies.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::EmptyCollection { .. } => "EmptyCollection",
            #[cfg(feature = "server")]
            Self::Database { .. } => "Database",
            #[cfg(feature = "server")]
            Self::Search { .. } => "Search",
            Self::Internal { .. } => "Internal",
        }
    }

    pub(crate) fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }
}
