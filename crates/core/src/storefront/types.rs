//! Request parameters and view data for the storefront.

use serde::{Deserialize, Serialize};

use crate::catalog::{FacetMap, Product};
use crate::config::CatalogConfig;

/// Raw listing/search query parameters.
///
/// Every field is an optional string so that no input can fail extraction;
/// normalization happens when the criteria are built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl ListingParams {
    /// Build from raw query pairs in request order.
    ///
    /// A key given more than once keeps all of its values joined with `,`,
    /// so `brand=nike&brand=adidas` reads as `brand=nike,adidas`. Unknown
    /// keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "brand" => &mut params.brand,
                "brands" => &mut params.brands,
                "model" => &mut params.model,
                "gender" => &mut params.gender,
                "page" => &mut params.page,
                _ => continue,
            };
            let value = value.into();
            if let Some(existing) = slot.as_mut() {
                existing.push(',');
                existing.push_str(&value);
            } else {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Limits applied by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorefrontSettings {
    pub page_size: usize,
    pub suggest_limit: usize,
    pub related_limit: usize,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self::from(&CatalogConfig::default())
    }
}

impl From<&CatalogConfig> for StorefrontSettings {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            page_size: config.page_size,
            suggest_limit: config.suggest_limit,
            related_limit: config.related_limit,
        }
    }
}

/// Home page data.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    /// Featured products in random order.
    pub featured: Vec<Product>,
    pub popular: Vec<Product>,
}

/// Shop and search page data.
#[derive(Debug, Clone, Serialize)]
pub struct ShopView {
    pub products: Vec<Product>,
    /// Facets over the whole catalog.
    pub filters: FacetMap,
    pub total_filtered: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// Normalized gender ("dames"/"heren") when a gender filter is active.
    pub gender: Option<String>,
    pub gender_label: String,
    pub selected_brand: Option<String>,
    pub selected_model: Option<String>,
    /// Search text, only set on search results.
    pub query: Option<String>,
}

/// `/api/sneakers` response body.
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub producten: Vec<Product>,
    #[serde(rename = "totalFiltered")]
    pub total_filtered: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}
