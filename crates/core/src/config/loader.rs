use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};

use super::{types::Config, ConfigError};

/// Prefix of environment overrides; nested keys are separated by `__`,
/// e.g. `KICKSHOP_CATALOG__DATA_DIR`.
pub const ENV_PREFIX: &str = "KICKSHOP_";

/// Read `path` and apply `KICKSHOP_*` overrides on top.
///
/// Sections and keys missing from the file take their defaults.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Parse TOML without environment overrides.
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
