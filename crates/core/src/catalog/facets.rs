//! Brand/model facets for the filter sidebar.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::Product;

/// Lowercased brand → distinct model names.
pub type FacetMap = BTreeMap<String, BTreeSet<String>>;

/// Group model names by brand.
///
/// Brands are trimmed and lowercased, models only trimmed. Records without
/// a brand or a model are skipped. Hidden records are not excluded here.
pub fn extract_facets(records: &[Product]) -> FacetMap {
    let mut facets = FacetMap::new();
    for product in records {
        let brand = product.brand.as_deref().map(str::trim).unwrap_or("");
        let model = product.model.as_deref().map(str::trim).unwrap_or("");
        if brand.is_empty() || model.is_empty() {
            continue;
        }
        facets
            .entry(brand.to_lowercase())
            .or_default()
            .insert(model.to_string());
    }
    facets
}

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-]").unwrap());

/// URL/anchor-safe form of a name: `"Air Max 90!"` becomes `"air-max-90"`.
pub fn slugify(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let dashed = WHITESPACE.replace_all(&lower, "-");
    NON_SLUG.replace_all(&dashed, "").into_owned()
}
