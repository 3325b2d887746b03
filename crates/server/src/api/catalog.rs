//! JSON catalog endpoints used by client-side scripts.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use kickshop_core::{ListingParams, ListingResponse, Product};

use super::{run_blocking, ErrorResponse, QueryPairs};
use crate::state::SharedState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn internal_error(status: StatusCode) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: "Catalog unavailable".to_string(),
        }),
    )
}

/// GET /api/search-suggest
///
/// First few visible matches for the search box.
pub async fn search_suggest(
    State(state): State<SharedState>,
    Query(pairs): QueryPairs,
) -> ApiResult<Vec<Product>> {
    let params = ListingParams::from_pairs(pairs);
    let suggestions = run_blocking(state.storefront(), move |shop| {
        shop.suggest(params.q.as_deref())
    })
    .await
    .map_err(internal_error)?;

    Ok(Json(suggestions))
}

/// GET /api/sneakers
///
/// Filtered, paginated product listing.
pub async fn list_sneakers(
    State(state): State<SharedState>,
    Query(pairs): QueryPairs,
) -> ApiResult<ListingResponse> {
    let params = ListingParams::from_pairs(pairs);
    let listing = run_blocking(state.storefront(), move |shop| shop.listing(&params))
        .await
        .map_err(internal_error)?;

    Ok(Json(listing))
}
