pub mod catalog;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;

pub use routes::create_router;

use axum::{extract::Query, http::StatusCode};
use kickshop_core::Storefront;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Raw query pairs in request order.
///
/// Extracting pairs instead of a struct keeps repeated keys from being
/// rejected; `ListingParams::from_pairs` folds them.
pub type QueryPairs = Query<Vec<(String, String)>>;

/// Run a storefront operation on the blocking pool.
///
/// Every operation rescans the catalog from disk, which must not stall the
/// async workers.
pub async fn run_blocking<T, F>(storefront: &Storefront, operation: F) -> Result<T, StatusCode>
where
    F: FnOnce(&Storefront) -> T + Send + 'static,
    T: Send + 'static,
{
    let storefront = storefront.clone();
    tokio::task::spawn_blocking(move || operation(&storefront))
        .await
        .map_err(|e| {
            error!("Catalog task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
