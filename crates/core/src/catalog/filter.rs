//! Listing and search filters.
//!
//! All text matching is case-insensitive substring matching. Filters only
//! remove records; they never reorder them. Hidden records are always
//! excluded.

use serde::Serialize;

use super::Product;

/// Gender filter after synonym normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderFilter {
    Dames,
    Heren,
}

impl GenderFilter {
    /// Normalize a raw query value. Unrecognized values mean "no filter".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "vrouw" | "dames" => Some(GenderFilter::Dames),
            "man" | "men" | "heren" => Some(GenderFilter::Heren),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderFilter::Dames => "dames",
            GenderFilter::Heren => "heren",
        }
    }
}

/// Active filter criteria for one request.
///
/// Text values are stored lowercased and trimmed; empty values are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub query: Option<String>,
    pub brands: Vec<String>,
    pub model: Option<String>,
    pub gender: Option<GenderFilter>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text match against name, brand and model.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = normalize(query);
        self
    }

    /// Comma-separated brand tokens; a record matches any of them.
    pub fn with_brands(mut self, brands: &str) -> Self {
        self.brands = brands.split(',').filter_map(normalize).collect();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = normalize(model);
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = GenderFilter::parse(gender);
        self
    }

    /// Whether `product` passes every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        !product.hidden
            && self.matches_query(product)
            && self.matches_brands(product)
            && self.matches_model(product)
            && self.matches_gender(product)
    }

    fn matches_query(&self, product: &Product) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        [&product.name, &product.brand, &product.model]
            .into_iter()
            .any(|field| contains_lower(field.as_deref().unwrap_or(""), query))
    }

    fn matches_brands(&self, product: &Product) -> bool {
        if self.brands.is_empty() {
            return true;
        }
        match &product.brand {
            Some(brand) => self.brands.iter().any(|token| contains_lower(brand, token)),
            None => false,
        }
    }

    fn matches_model(&self, product: &Product) -> bool {
        match (&self.model, &product.model) {
            (None, _) => true,
            (Some(wanted), Some(model)) => contains_lower(model, wanted),
            (Some(_), None) => false,
        }
    }

    fn matches_gender(&self, product: &Product) -> bool {
        match (self.gender, &product.gender) {
            (None, _) => true,
            (Some(wanted), Some(gender)) => gender.contains(wanted.as_str()),
            (Some(_), None) => false,
        }
    }
}

/// Records matching `criteria`, in input order.
pub fn filter_products(records: &[Product], criteria: &Criteria) -> Vec<Product> {
    records
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect()
}

/// Visible records satisfying `predicate`, in input order.
pub fn visible_where(records: &[Product], predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
    records
        .iter()
        .filter(|product| !product.hidden && predicate(product))
        .cloned()
        .collect()
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// `needle` must already be lowercased.
fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
