//! Application identity
//!
//! Maps the deployment brand to the provider parameters issued for it.

use std::str::FromStr;

use tracing::error;

use crate::{
    config::{BrandProfile, BrandsConfig},
    Config, Error, Result,
};

/// Supported deployment brands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Primary,
    Secondary,
}

impl FromStr for Brand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(Error::UnsupportedDeployment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// Deployment identity resolved against the configured brand profiles
#[derive(Debug, Clone)]
pub struct AppIdentity {
    brand: String,
    brands: BrandsConfig,
}

impl AppIdentity {
    pub fn new(brand: impl Into<String>, brands: BrandsConfig) -> Self {
        Self {
            brand: brand.into(),
            brands,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.deployment.brand.clone(), config.brands.clone())
    }

    /// Raw configured brand value
    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    fn profile(&self) -> Result<&BrandProfile> {
        match self.brand.parse::<Brand>()? {
            Brand::Primary => Ok(&self.brands.primary),
            Brand::Secondary => Ok(&self.brands.secondary),
        }
    }

    /// Provider customer id of this deployment
    pub fn customer_id(&self) -> Result<&str> {
        self.profile()
            .map(|profile| profile.customer_id.as_str())
            .inspect_err(|e| error!(brand = %self.brand, error = %e, "Cannot resolve provider customer id"))
    }

    /// Home page URL of this deployment
    pub fn home_page_url(&self) -> Result<&str> {
        self.profile()
            .map(|profile| profile.home_page_url.as_str())
            .inspect_err(|e| error!(brand = %self.brand, error = %e, "Cannot resolve home page URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brands() -> BrandsConfig {
        BrandsConfig {
            primary: BrandProfile {
                customer_id: "cust-primary".to_string(),
                home_page_url: "https://primary.example.com".to_string(),
            },
            secondary: BrandProfile {
                customer_id: "cust-secondary".to_string(),
                home_page_url: "https://secondary.example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_brand_parse() {
        assert_eq!("primary".parse::<Brand>().unwrap(), Brand::Primary);
        assert_eq!("secondary".parse::<Brand>().unwrap(), Brand::Secondary);
        assert!(matches!(
            "tertiary".parse::<Brand>(),
            Err(Error::UnsupportedDeployment(_))
        ));
        assert_eq!(Brand::Secondary.to_string(), "secondary");
    }

    #[test]
    fn test_primary_identity() {
        let identity = AppIdentity::new("primary", brands());
        assert_eq!(identity.customer_id().unwrap(), "cust-primary");
        assert_eq!(identity.home_page_url().unwrap(), "https://primary.example.com");
    }

    #[test]
    fn test_secondary_identity() {
        let identity = AppIdentity::new("secondary", brands());
        assert_eq!(identity.customer_id().unwrap(), "cust-secondary");
        assert_eq!(identity.home_page_url().unwrap(), "https://secondary.example.com");
    }

    #[test]
    fn test_unsupported_identity() {
        let identity = AppIdentity::new("", brands());
        assert!(matches!(identity.customer_id(), Err(Error::UnsupportedDeployment(_))));
        assert!(matches!(identity.home_page_url(), Err(Error::UnsupportedDeployment(_))));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.deployment.brand = "secondary".to_string();
        config.brands = brands();

        let identity = AppIdentity::from_config(&config);
        assert_eq!(identity.brand(), "secondary");
        assert_eq!(identity.customer_id().unwrap(), "cust-secondary");
    }
}
