use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Page size and suggestion limit are not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Catalog validation
    if config.catalog.page_size == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.page_size cannot be 0".to_string(),
        ));
    }
    if config.catalog.suggest_limit == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.suggest_limit cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CatalogConfig, ServerConfig};
    use std::net::IpAddr;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse::<IpAddr>().unwrap(),
                port: 0,
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_page_size_zero_fails() {
        let config = Config {
            catalog: CatalogConfig {
                page_size: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(msg)) if msg.contains("page_size")
        ));
    }

    #[test]
    fn test_validate_related_limit_zero_is_allowed() {
        let config = Config {
            catalog: CatalogConfig {
                related_limit: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
