//! Product detail lookup with variants and related products.

use rand::seq::SliceRandom;
use serde::Serialize;

use super::{CatalogError, Product};

/// A product with the records shown next to it.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    /// Other records of the same model.
    pub variants: Vec<Product>,
    /// Same brand, different model, in random order.
    pub related: Vec<Product>,
}

/// Look up `id` in the full catalog and gather its variants and related items.
///
/// Hidden records take part in the lookup and in both lists. A product
/// without a model has no variants and one without a brand has no related
/// products; missing fields never match each other.
pub fn resolve_detail(
    records: &[Product],
    id: &str,
    related_limit: usize,
) -> Result<ProductDetail, CatalogError> {
    let product = records
        .iter()
        .find(|p| p.id.as_deref() == Some(id))
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

    let variants = records
        .iter()
        .filter(|p| p.model.is_some() && p.model == product.model && p.id != product.id)
        .cloned()
        .collect();

    let mut related: Vec<Product> = records
        .iter()
        .filter(|p| {
            p.brand.is_some()
                && p.brand == product.brand
                && p.model != product.model
                && p.id != product.id
        })
        .cloned()
        .collect();
    shuffle(&mut related);
    related.truncate(related_limit);

    Ok(ProductDetail {
        product,
        variants,
        related,
    })
}

/// Fresh random permutation on every call.
pub fn shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut rand::rng());
}
