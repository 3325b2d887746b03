use std::sync::Arc;

use kickshop_core::{create_catalog_source, Config, Storefront, StorefrontSettings};

/// Shared application state
pub struct AppState {
    config: Config,
    storefront: Storefront,
}

impl AppState {
    pub fn new(config: Config, storefront: Storefront) -> Self {
        Self { config, storefront }
    }

    /// Build the state with the catalog source described by `config`.
    pub fn from_config(config: Config) -> Self {
        let source = create_catalog_source(&config.catalog);
        let storefront = Storefront::new(source, StorefrontSettings::from(&config.catalog));
        Self::new(config, storefront)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }
}

pub type SharedState = Arc<AppState>;
