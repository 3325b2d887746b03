pub mod catalog;
pub mod config;
pub mod metrics;
pub mod storefront;

pub use catalog::{
    create_catalog_source, CatalogError, CatalogSource, Criteria, FacetMap, FsCatalog, Gender,
    GenderFilter, Product, ProductDetail,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    ServerConfig, SiteConfig,
};
pub use storefront::{
    HomeView, ListingParams, ListingResponse, ShopView, Storefront, StorefrontSettings,
};
