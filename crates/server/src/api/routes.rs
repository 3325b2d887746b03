use axum::{
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use super::{catalog, handlers, middleware::metrics_middleware, pages};
use crate::state::SharedState;

/// Cache lifetime for static assets in production.
const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";

pub fn create_router(state: SharedState) -> Router {
    let site = state.config().site.clone();

    let routes = Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/search", get(pages::search))
        .route("/shop", get(pages::shop))
        .route("/product/{id}", get(pages::product_detail))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        // JSON endpoints
        .route("/api/search-suggest", get(catalog::search_suggest))
        .route("/api/sneakers", get(catalog::list_sneakers))
        // Operations
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .with_state(state);

    // Static assets (css, js, images) for everything else
    let static_files = ServeDir::new(&site.static_dir);
    let routes = if site.production {
        routes.fallback_service(
            tower::ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static(STATIC_CACHE_CONTROL),
                ))
                .service(static_files),
        )
    } else {
        routes.fallback_service(static_files)
    };

    routes
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
