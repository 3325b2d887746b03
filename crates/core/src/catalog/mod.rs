//! Product catalog - flat JSON files on disk, reloaded per request.
//!
//! The pipeline is: load the whole tree, filter, paginate. Facets and the
//! detail lookup work on the unfiltered catalog.

mod detail;
mod facets;
mod filter;
mod loader;
mod paginate;
mod source;
mod types;

pub use detail::{resolve_detail, shuffle, ProductDetail};
pub use facets::{extract_facets, slugify, FacetMap};
pub use filter::{filter_products, visible_where, Criteria, GenderFilter};
pub use loader::{load_catalog, scan_catalog, LoadReport};
pub use paginate::{paginate, parse_page, Page};
pub use source::{create_catalog_source, CachedCatalog, CatalogSource, FsCatalog, Snapshot};
pub use types::*;
