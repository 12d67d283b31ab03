use crate::error::CatalogError;
use crate::factions::factions;
use crate::links::external_info_providers as providers_for;
use crate::model::{Card, ErrorResponse, ExternalInfoProvider, Faction};
use crate::Catalog;
use axum::Json;
use axum::extract::{Path, Query, State};
use nucard_derive::api_handler;
use nucard_domain::constants::CATALOG_TAG;
use nucard_kernel::server::ApiState;
use serde::Deserialize;

/// Query string of the search route.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

fn catalog(state: &ApiState) -> Result<&Catalog, CatalogError> {
    state.try_get_slice::<Catalog>().map_err(|e| CatalogError::from(e.to_string()))
}

#[api_handler(
    get,
    path = "/cards/{id}",
    params(("id" = String, Path, description = "Card id")),
    responses(
        (status = OK, description = "The card", body = Card),
        (status = NOT_FOUND, description = "No card with this id", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Card store unavailable", body = ErrorResponse),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn get_card(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Card>, CatalogError> {
    Ok(Json(catalog(&state)?.store.card(&id).await?))
}

#[api_handler(
    get,
    path = "/cards/random",
    responses(
        (status = OK, description = "A random card", body = Card),
        (status = INTERNAL_SERVER_ERROR, description = "Empty collection or card store unavailable", body = ErrorResponse),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn random_card(State(state): State<ApiState>) -> Result<Json<Card>, CatalogError> {
    catalog(&state)?.store.random_card().await?.map(Json).ok_or_else(|| {
        CatalogError::EmptyCollection { message: "No cards to choose from".into(), context: None }
    })
}

#[api_handler(
    get,
    path = "/cards/search",
    params(("query" = String, Query, description = "Free-text query")),
    responses(
        (status = OK, description = "Up to ten cards, most relevant first", body = [Card]),
        (status = NOT_FOUND, description = "Nothing matched", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Search index or card store unavailable", body = ErrorResponse),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn search_cards(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Card>>, CatalogError> {
    let cards = catalog(&state)?.search.search(&params.query).await?;
    if cards.is_empty() {
        return Err(CatalogError::not_found(format!("search:{}", params.query)));
    }
    Ok(Json(cards))
}

#[api_handler(
    get,
    path = "/cards/{id}/external-info-providers",
    params(("id" = String, Path, description = "Card id")),
    responses(
        (status = OK, description = "Reference sites for the card", body = [ExternalInfoProvider]),
        (status = NOT_FOUND, description = "No card with this id", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Card store unavailable", body = ErrorResponse),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn external_info_providers(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ExternalInfoProvider>>, CatalogError> {
    let card = catalog(&state)?.store.card(&id).await?;
    Ok(Json(providers_for(&card).into()))
}

#[api_handler(
    get,
    path = "/factions",
    responses((status = OK, description = "All playable factions", body = [Faction])),
    tag = CATALOG_TAG,
)]
pub(super) async fn list_factions() -> Json<&'static [Faction]> {
    Json(factions())
}
