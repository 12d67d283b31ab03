use std::borrow::Cow;

/// Errors raised while talking to the search index.
#[nucard_derive::nucard_error]
pub enum SearchError {
    /// Missing or malformed client settings.
    #[error("Invalid search configuration{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Transport failures and undecodable responses.
    #[error("Search request failed{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The index answered with a non-success status.
    #[error("Search index returned {status}{}: {message}", format_context(.context))]
    Status {
        status: u16,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}
