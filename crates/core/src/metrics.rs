//! Prometheus metrics for core components.
//!
//! This module provides metrics for catalog loading and the snapshot cache.
//! The server registers them alongside its HTTP metrics.

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts};

/// Catalog scans performed.
pub static CATALOG_LOADS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("kickshop_catalog_loads_total", "Total catalog scans").unwrap()
});

/// Catalog scan duration in seconds.
pub static CATALOG_LOAD_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "kickshop_catalog_load_duration_seconds",
            "Duration of a full catalog scan",
        )
        .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]),
    )
    .unwrap()
});

/// Catalog files read, by result.
pub static CATALOG_FILES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("kickshop_catalog_files_total", "Catalog files read"),
        &["result"], // "parsed", "failed"
    )
    .unwrap()
});

/// Records produced by the most recent scan.
pub static CATALOG_RECORDS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "kickshop_catalog_records",
        "Product records in the most recent catalog scan",
    )
    .unwrap()
});

/// Snapshot cache lookups, by result.
pub static CATALOG_CACHE_LOOKUPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "kickshop_catalog_cache_lookups_total",
            "Catalog snapshot cache lookups",
        ),
        &["result"], // "hit", "miss"
    )
    .unwrap()
});

/// All core metrics, for registration with the server registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_LOADS.clone()),
        Box::new(CATALOG_LOAD_DURATION.clone()),
        Box::new(CATALOG_FILES.clone()),
        Box::new(CATALOG_RECORDS.clone()),
        Box::new(CATALOG_CACHE_LOOKUPS.clone()),
    ]
}
