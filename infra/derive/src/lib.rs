#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `NuCard` workspace: error enums with context support,
//! feature slice handles, and `OpenAPI`-aware API models and handlers.
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros;
//! see the consuming crates for working code.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a data transfer object exposed by the HTTP API.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` when they are not derived already.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Applies `rename_all = "camelCase"` and `deny_unknown_fields` unless told otherwise.
///
/// # Arguments
///
/// * `rename_all = "..."` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Accepts unknown fields (required for `#[serde(flatten)]`).
///
/// # Example
///
/// ```rust,ignore
/// #[nucard_derive::api_model(deny_unknown_fields = false)]
/// pub struct Card {
///     pub id: String,
///     pub name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` when the `server` feature is enabled.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `path = "..."`, `params(...)`,
/// `responses(...)`, `tag = ...`).
///
/// # Example
///
/// ```rust,ignore
/// #[nucard_derive::api_handler(
///     get,
///     path = "/factions",
///     responses((status = OK, body = [Faction])),
///     tag = CATALOG_TAG,
/// )]
/// pub async fn factions_handler() -> Json<&'static [Faction]> {
///     Json(FACTIONS)
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a crate error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to
///   `Result<T, Source>` for every variant carrying a source.
/// * `From<Source>` for variants with a `source` field (or a `#[source]`/`#[from]` field).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-local `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must have named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[nucard_derive::nucard_error]
/// pub enum SearchError {
///     #[error("HTTP error{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal search error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn send() -> Result<(), SearchError> {
///     request().context("Querying index")?;
///     Err("unexpected payload".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn nucard_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature slice handle.
///
/// The annotated struct's fields move into a generated `<Name>Inner` struct. `<Name>`
/// becomes a cheap-clone `Arc` wrapper that derefs to the inner state and implements
/// `nucard_kernel::domain::registry::FeatureSlice` so it can be registered in `ApiState`.
///
/// # Example
/// ```rust,ignore
/// #[nucard_derive::nucard_slice]
/// pub struct Catalog {
///     pub store: CardStore,
/// }
///
/// let catalog = Catalog::new(CatalogInner { store });
/// ```
#[proc_macro_attribute]
pub fn nucard_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
