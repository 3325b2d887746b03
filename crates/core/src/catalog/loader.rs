//! Recursive loading of the JSON catalog tree.
//!
//! Every `.json` file below the root holds either one product object or an
//! array of them. A file that cannot be read or parsed is logged and skipped;
//! it never aborts the load.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{CatalogError, Product};

const JSON_SUFFIX: &str = ".json";

/// Summary of one catalog scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// JSON files parsed successfully.
    pub files_parsed: usize,
    /// JSON files (or directory entries) that could not be read or parsed.
    pub files_failed: usize,
    /// Product records produced.
    pub records: usize,
}

/// Load every product record below `root`.
pub fn load_catalog(root: &Path) -> Vec<Product> {
    scan_catalog(root).0
}

/// Load every product record below `root` and report what was read.
///
/// Records keep their order within a file. Directory entries are visited
/// depth-first in file-name order.
pub fn scan_catalog(root: &Path) -> (Vec<Product>, LoadReport) {
    let mut products = Vec::new();
    let mut report = LoadReport::default();

    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable catalog entry: {}", e);
                report.files_failed += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_json_file(entry.path()) {
            continue;
        }

        match read_records(entry.path()) {
            Ok(records) => {
                report.files_parsed += 1;
                products.extend(records);
            }
            Err(e) => {
                warn!("Skipping catalog file: {}", e);
                report.files_failed += 1;
            }
        }
    }

    report.records = products.len();
    debug!(
        "Scanned catalog at {}: {} files, {} failed, {} records",
        root.display(),
        report.files_parsed,
        report.files_failed,
        report.records
    );

    (products, report)
}

fn is_json_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(JSON_SUFFIX))
        .unwrap_or(false)
}

fn read_records(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(records_from_value(value, path))
}

/// Flatten a parsed file into records.
///
/// Arrays contribute each object element, objects contribute themselves,
/// anything else contributes nothing.
fn records_from_value(value: Value, path: &Path) -> Vec<Product> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let product = Product::from_value(item);
                if product.is_none() {
                    debug!(
                        "Ignoring non-object element {} in {}",
                        index,
                        path.display()
                    );
                }
                product
            })
            .collect(),
        value @ Value::Object(_) => Product::from_value(value).into_iter().collect(),
        _ => {
            debug!("Ignoring non-record JSON in {}", path.display());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().filter_map(|p| p.id.as_deref()).collect()
    }

    #[test]
    fn test_counts_single_objects_and_arrays() {
        let dir = TempDir::new().unwrap();
        // N = 2 single-object files
        write(dir.path(), "a.json", r#"{"id": "single-a"}"#);
        write(dir.path(), "nested/b.json", r#"{"id": "single-b"}"#);
        // M = 2 array files of K = 3
        write(
            dir.path(),
            "nike/list.json",
            r#"[{"id": "n1"}, {"id": "n2"}, {"id": "n3"}]"#,
        );
        write(
            dir.path(),
            "adidas/deep/list.json",
            r#"[{"id": "a1"}, {"id": "a2"}, {"id": "a3"}]"#,
        );

        let (products, report) = scan_catalog(dir.path());

        assert_eq!(products.len(), 2 + 2 * 3);
        assert_eq!(report.files_parsed, 4);
        assert_eq!(report.files_failed, 0);
        assert_eq!(report.records, 8);
    }

    #[test]
    fn test_preserves_order_within_file() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "list.json",
            r#"[{"id": "z"}, {"id": "a"}, {"id": "m"}]"#,
        );

        let products = load_catalog(dir.path());
        assert_eq!(ids(&products), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_invalid_file_does_not_abort_siblings() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.json", r#"{"id": "before"}"#);
        write(dir.path(), "b.json", r#"{"id": "broken", "#);
        write(dir.path(), "c.json", r#"[{"id": "after"}]"#);

        let (products, report) = scan_catalog(dir.path());

        assert_eq!(ids(&products), vec!["before", "after"]);
        assert_eq!(report.files_parsed, 2);
        assert_eq!(report.files_failed, 1);
    }

    #[test]
    fn test_ignores_non_json_files_and_non_record_values() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "readme.txt", r#"{"id": "not-json-suffix"}"#);
        write(dir.path(), "string.json", r#""just a string""#);
        write(dir.path(), "number.json", "42");
        write(dir.path(), "null.json", "null");
        write(dir.path(), "mixed.json", r#"[1, {"id": "kept"}, "x", null]"#);

        let (products, report) = scan_catalog(dir.path());

        assert_eq!(ids(&products), vec!["kept"]);
        assert_eq!(report.files_parsed, 4);
        assert_eq!(report.files_failed, 0);
    }

    #[test]
    fn test_read_records_reports_read_and_parse_failures() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "broken.json", "[{");
        write(dir.path(), "empty.json", "");
        fs::write(dir.path().join("latin1.json"), [0x7b, 0xff, 0x7d]).unwrap();

        let err = read_records(&dir.path().join("broken.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { ref path, .. } if path.ends_with("broken.json")));
        assert!(err.to_string().contains("broken.json"));

        assert!(matches!(
            read_records(&dir.path().join("empty.json")),
            Err(CatalogError::Parse { .. })
        ));
        assert!(matches!(
            read_records(&dir.path().join("latin1.json")),
            Err(CatalogError::Read { .. })
        ));
        assert!(matches!(
            read_records(&dir.path().join("absent.json")),
            Err(CatalogError::Read { .. })
        ));
    }

    #[test]
    fn test_missing_root_yields_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let (products, report) = scan_catalog(&dir.path().join("does-not-exist"));

        assert!(products.is_empty());
        assert_eq!(report.files_failed, 1);
    }

    #[test]
    fn test_no_deduplication() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "one.json", r#"{"id": "dup"}"#);
        write(dir.path(), "two.json", r#"{"id": "dup"}"#);

        let products = load_catalog(dir.path());
        assert_eq!(ids(&products), vec!["dup", "dup"]);
    }

    #[test]
    fn test_picks_up_new_files_between_loads() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.json", r#"{"id": "a"}"#);
        assert_eq!(load_catalog(dir.path()).len(), 1);

        write(dir.path(), "b.json", r#"{"id": "b"}"#);
        assert_eq!(load_catalog(dir.path()).len(), 2);
    }
}
