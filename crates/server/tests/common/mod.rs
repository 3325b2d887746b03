//! Common test utilities for in-process HTTP testing.
//!
//! The fixture writes a small product tree into a temp directory, builds
//! the real router on top of it and sends requests through `oneshot`.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use kickshop_core::{CatalogConfig, Config, SiteConfig};
use kickshop_server::state::AppState;

/// Test fixture serving a temp catalog through the real router.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Holds `data/` and `public/`
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Raw body text (HTML pages)
    pub text: String,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

/// Fixture options.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub page_size: usize,
    pub production: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            production: false,
        }
    }
}

impl TestFixture {
    /// Create a fixture with the default catalog.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    pub async fn with_config(test_config: TestConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("data");
        let static_dir = temp_dir.path().join("public");

        write_default_catalog(&data_dir);
        std::fs::create_dir_all(static_dir.join("css")).expect("Failed to create static dir");
        std::fs::write(static_dir.join("css/style.css"), "body { margin: 0; }")
            .expect("Failed to write stylesheet");

        let config = Config {
            catalog: CatalogConfig {
                data_dir,
                page_size: test_config.page_size,
                ..Default::default()
            },
            site: SiteConfig {
                static_dir,
                production: test_config.production,
            },
            ..Default::default()
        };

        let state = Arc::new(AppState::from_config(config));
        let router = kickshop_server::api::create_router(state);

        Self { router, temp_dir }
    }

    /// Write (or overwrite) a catalog file relative to `data/`.
    pub fn write_catalog_file(&self, name: &str, content: Value) {
        let path = self.temp_dir.path().join("data").join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create catalog dir");
        }
        std::fs::write(path, content.to_string()).expect("Failed to write catalog file");
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}

/// Product ids of a JSON listing, in response order.
pub fn ids(products: &Value) -> Vec<String> {
    products
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|p| p["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Catalog used by most tests.
///
/// Traversal order is `adidas/samba.json`, `broken.json` (skipped),
/// `new-balance.json`, `nike.json`, so the visible records come out as
/// samba-og, nb-550-white, nb-550-green, af1-white, af1-black, dunk-panda.
fn write_default_catalog(data_dir: &Path) {
    std::fs::create_dir_all(data_dir.join("adidas")).expect("Failed to create data dir");

    let files = [
        (
            "adidas/samba.json",
            json!({
                "id": "samba-og", "name": "Samba OG", "brand": "Adidas", "model": "Samba",
                "price": 100, "gender": "dames", "featured": true
            }),
        ),
        (
            "new-balance.json",
            json!([
                {"id": "nb-550-white", "name": "550 White", "brand": "New Balance",
                 "model": "550", "price": 129.95},
                {"id": "nb-550-green", "name": "550 Green", "brand": "New Balance",
                 "model": "550", "price": 129.95, "gender": "heren"}
            ]),
        ),
        (
            "nike.json",
            json!([
                {"id": "af1-white", "name": "Air Force 1 White", "brand": "Nike",
                 "model": "Air Force 1", "price": 119.99, "gender": ["heren", "dames"],
                 "featured": true, "popular": true, "sizes": [41, 42, 43]},
                {"id": "af1-black", "name": "Air Force 1 Black", "brand": "Nike",
                 "model": "Air Force 1", "price": 119.99, "gender": "heren"},
                {"id": "dunk-panda", "name": "Dunk Low Panda", "brand": "Nike",
                 "model": "Dunk Low", "price": 109.99, "gender": "dames", "popular": true},
                {"id": "nike-hidden", "name": "Air Max Secret", "brand": "Nike",
                 "model": "Air Max", "hidden": true}
            ]),
        ),
    ];

    for (name, content) in files {
        std::fs::write(data_dir.join(name), content.to_string())
            .expect("Failed to write catalog file");
    }
    std::fs::write(data_dir.join("broken.json"), "{ not json").expect("Failed to write file");
    std::fs::write(data_dir.join("notes.txt"), "not a catalog file").expect("Failed to write file");
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}

/// Helper to assert a JSON path equals expected value.
#[macro_export]
macro_rules! assert_json_path {
    ($json:expr, $path:expr, $expected:expr) => {
        let actual = &$json[$path];
        assert_eq!(
            actual, &$expected,
            "Path '{}' expected {:?}, got {:?}",
            $path, $expected, actual
        );
    };
}
