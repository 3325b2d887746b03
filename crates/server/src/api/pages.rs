//! HTML page handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use kickshop_core::{CatalogError, ListingParams};

use super::{run_blocking, QueryPairs};
use crate::state::SharedState;
use crate::views;

type PageResult = Result<Html<String>, (StatusCode, Html<String>)>;

fn unavailable(status: StatusCode) -> (StatusCode, Html<String>) {
    (status, Html("Catalog unavailable".to_string()))
}

/// GET /
pub async fn home(State(state): State<SharedState>) -> PageResult {
    let view = run_blocking(state.storefront(), |shop| shop.home())
        .await
        .map_err(unavailable)?;
    Ok(Html(views::render_home(&view)))
}

/// GET /search?q=&page=
pub async fn search(
    State(state): State<SharedState>,
    Query(pairs): QueryPairs,
) -> PageResult {
    let params = ListingParams::from_pairs(pairs);
    let view = run_blocking(state.storefront(), move |shop| {
        shop.search(params.q.as_deref(), params.page.as_deref())
    })
    .await
    .map_err(unavailable)?;
    Ok(Html(views::render_shop(&view)))
}

/// GET /shop?brand=&model=&gender=&page=
pub async fn shop(
    State(state): State<SharedState>,
    Query(pairs): QueryPairs,
) -> PageResult {
    let params = ListingParams::from_pairs(pairs);
    let view = run_blocking(state.storefront(), move |shop| shop.shop(&params))
        .await
        .map_err(unavailable)?;
    Ok(Html(views::render_shop(&view)))
}

/// GET /product/{id}
///
/// Unknown ids render the not-found page with status 404.
pub async fn product_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> PageResult {
    let detail = run_blocking(state.storefront(), move |shop| shop.product(&id))
        .await
        .map_err(unavailable)?;

    match detail {
        Ok(detail) => Ok(Html(views::render_product(&detail))),
        Err(CatalogError::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, Html(views::render_not_found())))
        }
        Err(e) => {
            tracing::error!("Product lookup failed: {}", e);
            Err(unavailable(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

/// GET /about
pub async fn about() -> Html<String> {
    Html(views::render_about())
}

/// GET /contact
pub async fn contact() -> Html<String> {
    Html(views::render_contact())
}
