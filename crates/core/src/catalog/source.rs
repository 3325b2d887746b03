//! Where catalog snapshots come from.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

use super::loader::scan_catalog;
use super::Product;
use crate::config::CatalogConfig;
use crate::metrics::{
    CATALOG_CACHE_LOOKUPS, CATALOG_FILES, CATALOG_LOADS, CATALOG_LOAD_DURATION, CATALOG_RECORDS,
};

/// An immutable view of the whole catalog.
pub type Snapshot = Arc<Vec<Product>>;

/// Trait for catalog sources.
pub trait CatalogSource: Send + Sync {
    /// Produce the full catalog. Never fails: unreadable data is skipped.
    fn load(&self) -> Snapshot;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Rescans the JSON tree on every load.
pub struct FsCatalog {
    root: PathBuf,
}

impl FsCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CatalogSource for FsCatalog {
    fn load(&self) -> Snapshot {
        let start = Instant::now();
        let (products, report) = scan_catalog(&self.root);

        CATALOG_LOADS.inc();
        CATALOG_LOAD_DURATION.observe(start.elapsed().as_secs_f64());
        CATALOG_FILES
            .with_label_values(&["parsed"])
            .inc_by(report.files_parsed as u64);
        CATALOG_FILES
            .with_label_values(&["failed"])
            .inc_by(report.files_failed as u64);
        CATALOG_RECORDS.set(report.records as i64);

        Arc::new(products)
    }

    fn describe(&self) -> String {
        format!("filesystem catalog at {}", self.root.display())
    }
}

/// Reuses the last snapshot of an inner source for a fixed time.
///
/// Files changed on disk become visible once the snapshot expires.
pub struct CachedCatalog<S> {
    inner: S,
    ttl: Duration,
    snapshot: Mutex<Option<(Instant, Snapshot)>>,
}

impl<S: CatalogSource> CachedCatalog<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            snapshot: Mutex::new(None),
        }
    }
}

impl<S: CatalogSource> CatalogSource for CachedCatalog<S> {
    fn load(&self) -> Snapshot {
        let mut cached = self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some((loaded_at, snapshot)) = cached.as_ref() {
            if loaded_at.elapsed() < self.ttl {
                CATALOG_CACHE_LOOKUPS.with_label_values(&["hit"]).inc();
                return Arc::clone(snapshot);
            }
        }

        CATALOG_CACHE_LOOKUPS.with_label_values(&["miss"]).inc();
        debug!("Catalog snapshot expired, reloading {}", self.inner.describe());
        let snapshot = self.inner.load();
        *cached = Some((Instant::now(), Arc::clone(&snapshot)));
        snapshot
    }

    fn describe(&self) -> String {
        format!("{} (cached {}s)", self.inner.describe(), self.ttl.as_secs())
    }
}

/// Factory function to create the catalog source from config
pub fn create_catalog_source(config: &CatalogConfig) -> Arc<dyn CatalogSource> {
    let fs = FsCatalog::new(&config.data_dir);
    if config.cache_ttl_secs > 0 {
        Arc::new(CachedCatalog::new(
            fs,
            Duration::from_secs(config.cache_ttl_secs),
        ))
    } else {
        Arc::new(fs)
    }
}
