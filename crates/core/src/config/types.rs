use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    3000
}

/// Catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Root of the JSON product tree
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Products per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Maximum number of search suggestions
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
    /// Maximum number of related products on a detail page
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
    /// Seconds a loaded catalog may be reused (0 rescans on every request)
    #[serde(default)]
    pub cache_ttl_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            suggest_limit: default_suggest_limit(),
            related_limit: default_related_limit(),
            cache_ttl_secs: 0,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_page_size() -> usize {
    12
}

fn default_suggest_limit() -> usize {
    6
}

fn default_related_limit() -> usize {
    8
}

/// Site configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Directory served as static assets (css, js, images)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Production mode: JSON logs and long-lived cache headers on assets
    #[serde(default)]
    pub production: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            production: false,
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}
