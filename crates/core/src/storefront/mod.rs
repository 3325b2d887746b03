//! Storefront service: one operation per page or endpoint.
//!
//! Every operation takes a fresh snapshot from the catalog source, so
//! changes on disk show up without a restart.

mod types;

pub use types::*;

use std::sync::Arc;

use crate::catalog::{
    extract_facets, filter_products, paginate, parse_page, resolve_detail, shuffle, visible_where,
    CatalogError, CatalogSource, Criteria, GenderFilter, Product, ProductDetail,
};

/// Composes a catalog source with the filter, paginate and detail steps.
#[derive(Clone)]
pub struct Storefront {
    source: Arc<dyn CatalogSource>,
    settings: StorefrontSettings,
}

impl Storefront {
    pub fn new(source: Arc<dyn CatalogSource>, settings: StorefrontSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> StorefrontSettings {
        self.settings
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Featured products (shuffled) and popular products.
    pub fn home(&self) -> HomeView {
        let catalog = self.source.load();

        let mut featured = visible_where(&catalog, |p| p.featured);
        shuffle(&mut featured);
        let popular = visible_where(&catalog, |p| p.popular);

        HomeView { featured, popular }
    }

    /// Free-text search results as a shop page.
    pub fn search(&self, query: Option<&str>, page: Option<&str>) -> ShopView {
        let catalog = self.source.load();
        let query = query.unwrap_or("").trim().to_lowercase();
        let criteria = Criteria::new().with_query(&query);

        let found = filter_products(&catalog, &criteria);
        let page = paginate(found, parse_page(page), self.settings.page_size);

        ShopView {
            products: page.items,
            filters: extract_facets(&catalog),
            total_filtered: page.total_count,
            total_pages: page.total_pages,
            current_page: page.page,
            gender: None,
            gender_label: format!("Zoekresultaten voor \"{}\"", query),
            selected_brand: None,
            selected_model: None,
            query: Some(query),
        }
    }

    /// Brand/model/gender filtered shop page.
    pub fn shop(&self, params: &ListingParams) -> ShopView {
        let catalog = self.source.load();
        let criteria = listing_criteria(params);

        let filtered = filter_products(&catalog, &criteria);
        let page = paginate(
            filtered,
            parse_page(params.page.as_deref()),
            self.settings.page_size,
        );

        let selected_brand = (!criteria.brands.is_empty()).then(|| criteria.brands.join(","));
        let selected_model = criteria.model.clone();
        let gender_label = listing_label(
            selected_model.as_deref(),
            selected_brand.as_deref(),
            criteria.gender,
        );

        ShopView {
            products: page.items,
            filters: extract_facets(&catalog),
            total_filtered: page.total_count,
            total_pages: page.total_pages,
            current_page: page.page,
            gender: criteria.gender.map(|g| g.as_str().to_string()),
            gender_label,
            selected_brand,
            selected_model,
            query: None,
        }
    }

    /// First matches for the search box, without pagination.
    pub fn suggest(&self, query: Option<&str>) -> Vec<Product> {
        let catalog = self.source.load();
        let criteria = Criteria::new().with_query(query.unwrap_or(""));

        catalog
            .iter()
            .filter(|p| criteria.matches(p))
            .take(self.settings.suggest_limit)
            .cloned()
            .collect()
    }

    /// Filtered, paginated listing for client-side pagination.
    pub fn listing(&self, params: &ListingParams) -> ListingResponse {
        let catalog = self.source.load();
        let criteria = listing_criteria(params);

        let filtered = filter_products(&catalog, &criteria);
        let page = paginate(
            filtered,
            parse_page(params.page.as_deref()),
            self.settings.page_size,
        );

        ListingResponse {
            producten: page.items,
            total_filtered: page.total_count,
            total_pages: page.total_pages,
        }
    }

    /// Product detail with variants and shuffled related products.
    pub fn product(&self, id: &str) -> Result<ProductDetail, CatalogError> {
        let catalog = self.source.load();
        resolve_detail(&catalog, id, self.settings.related_limit)
    }
}

/// `brands` wins over `brand` when both are present.
fn listing_criteria(params: &ListingParams) -> Criteria {
    let brands = params
        .brands
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .or(params.brand.as_deref())
        .unwrap_or("");

    Criteria::new()
        .with_brands(brands)
        .with_model(params.model.as_deref().unwrap_or(""))
        .with_gender(params.gender.as_deref().unwrap_or(""))
}

/// Page title for a shop listing, most specific filter first.
fn listing_label(model: Option<&str>, brand: Option<&str>, gender: Option<GenderFilter>) -> String {
    if let Some(model) = model {
        return model.to_string();
    }
    if let Some(brand) = brand {
        return format!("alle {} schoenen", brand);
    }
    match gender {
        Some(GenderFilter::Heren) => "mannen schoenen".to_string(),
        Some(GenderFilter::Dames) => "vrouwen schoenen".to_string(),
        None => "sneakers".to_string(),
    }
}
