use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub deployment: DeploymentConfig,
    pub brands: BrandsConfig,
    pub provider: ProviderConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            http_port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_path: None,
        }
    }
}

/// Identity of this deployment
///
/// `brand` is kept as the raw configured string. Whether it names a supported
/// brand is decided per request by `AppIdentity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    pub brand: String,
    /// Active jurisdiction, e.g. "US-NJ" (logged with provider failures)
    pub jurisdiction: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            brand: "primary".to_string(),
            jurisdiction: String::new(),
        }
    }
}

/// Provider parameters for one brand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandProfile {
    pub customer_id: String,
    pub home_page_url: String,
}

/// Profiles of the supported brands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandsConfig {
    pub primary: BrandProfile,
    pub secondary: BrandProfile,
}

/// External live-stream provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    /// Base URLs keyed by request path prefix (e.g. "/v1/player")
    pub base_url_overrides: BTreeMap<String, String>,
    pub api_key: Option<String>,
    pub connect_timeout_seconds: u64,
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            base_url_overrides: BTreeMap::new(),
            api_key: None,
            connect_timeout_seconds: 10,
            timeout_seconds: 30,
        }
    }
}

/// Event catalog source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file with events and live streams
    pub seed_path: Option<String>,
}

impl Config {
    /// Load configuration from multiple sources with priority:
    /// 1. Environment variables (highest priority)
    /// 2. Config file (if provided)
    /// 3. Defaults (lowest priority)
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_file {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
            }
        }

        // LIVEGATE_PROVIDER__BASE_URL, LIVEGATE_DEPLOYMENT__BRAND, ...
        builder = builder.add_source(
            Environment::with_prefix("LIVEGATE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load from environment variables only (for Docker/K8s)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from file path
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Get HTTP address
    #[must_use]
    pub fn http_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.http_port)
    }

    /// Check for misconfigurations that make the server unusable.
    ///
    /// The deployment brand is deliberately not checked here: an unknown
    /// brand fails individual resolutions, not startup.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.http_port == 0 {
            errors.push("server.http_port must be non-zero".to_string());
        }

        if self.provider.base_url.is_empty() {
            errors.push("provider.base_url is required".to_string());
        } else if let Err(e) = url::Url::parse(&self.provider.base_url) {
            errors.push(format!("provider.base_url is not a valid URL: {e}"));
        }

        for (prefix, base_url) in &self.provider.base_url_overrides {
            if !prefix.starts_with('/') {
                errors.push(format!("provider.base_url_overrides key '{prefix}' must start with '/'"));
            }
            if let Err(e) = url::Url::parse(base_url) {
                errors.push(format!("provider.base_url_overrides['{prefix}'] is not a valid URL: {e}"));
            }
        }

        if crate::logging::parse_log_level(&self.logging.level).is_err() {
            errors.push(format!("logging.level '{}' is invalid", self.logging.level));
        }

        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            errors.push(format!("logging.format '{}' must be 'json' or 'pretty'", self.logging.format));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid_config() -> Config {
        Config {
            provider: ProviderConfig {
                base_url: "https://api.provider.test".to_string(),
                ..ProviderConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.deployment.brand, "primary");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.provider.timeout_seconds, 30);
        assert!(config.catalog.seed_path.is_none());
    }

    #[test]
    fn test_http_address() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                http_port: 9090,
            },
            ..Config::default()
        };

        assert_eq!(config.http_address(), "127.0.0.1:9090");
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_provider_base_url() {
        let errors = Config::default().validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("provider.base_url")));
    }

    #[test]
    fn test_validate_rejects_bad_overrides_and_logging() {
        let mut config = valid_config();
        config
            .provider
            .base_url_overrides
            .insert("v1/player".to_string(), "not a url".to_string());
        config.logging.level = "loud".to_string();
        config.logging.format = "xml".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_unknown_brand_is_not_a_startup_error() {
        let mut config = valid_config();
        config.deployment.brand = "mystery".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            r#"
deployment:
  brand: secondary
  jurisdiction: US-PA
brands:
  secondary:
    customer_id: cust-2
    home_page_url: https://secondary.example.com
provider:
  base_url: https://api.provider.test
  base_url_overrides:
    /v1/player: https://player.provider.test
"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.deployment.brand, "secondary");
        assert_eq!(config.deployment.jurisdiction, "US-PA");
        assert_eq!(config.brands.secondary.customer_id, "cust-2");
        assert_eq!(
            config.provider.base_url_overrides.get("/v1/player").map(String::as_str),
            Some("https://player.provider.test")
        );
        // Unset sections keep their defaults
        assert_eq!(config.server.http_port, 8080);
    }
}
