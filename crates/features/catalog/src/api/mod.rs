//! HTTP surface of the catalog slice.

mod handlers;

use crate::error::CatalogError;
use crate::model::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nucard_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub use handlers::SearchParams;

/// Catalog routes, mounted at the API root.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::random_card))
        .routes(routes!(handlers::search_cards))
        .routes(routes!(handlers::get_card))
        .routes(routes!(handlers::external_info_providers))
        .routes(routes!(handlers::list_factions))
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, kind = self.kind(), "Catalog request failed");
        } else {
            tracing::debug!(error = %self, "Catalog lookup missed");
        }

        let body = ErrorResponse { error: self.kind().to_owned(), message: self.to_string() };
        (status, Json(body)).into_response()
    }
}
