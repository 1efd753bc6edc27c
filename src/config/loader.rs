//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading offer
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{OfferError, OfferResult};

use super::types::{AllocationConfig, CompanyConfig, OfferConfig};

/// Loads and provides access to offer configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── allocation.yaml  # basic/HRA share of the monthly CTC
/// └── company.yaml     # letter defaults (signatory, probation)
/// ```
///
/// # Example
///
/// ```no_run
/// use offer_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Issuer: {}", loader.company().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: OfferConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// if the allocation ratios fail validation.
    pub fn load<P: AsRef<Path>>(path: P) -> OfferResult<Self> {
        let path = path.as_ref();

        let allocation = Self::load_yaml::<AllocationConfig>(&path.join("allocation.yaml"))?;
        allocation.validate()?;

        let company = Self::load_yaml::<CompanyConfig>(&path.join("company.yaml"))?;

        debug!(
            config_dir = %path.display(),
            basic_ratio = %allocation.basic_ratio(),
            hra_ratio = %allocation.hra_ratio(),
            "Loaded offer configuration"
        );

        Ok(Self {
            config: OfferConfig::new(allocation, company),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> OfferResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| OfferError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| OfferError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying offer configuration.
    pub fn config(&self) -> &OfferConfig {
        &self.config
    }

    /// Returns the salary allocation ratios.
    pub fn allocation(&self) -> &AllocationConfig {
        self.config.allocation()
    }

    /// Returns the company defaults.
    pub fn company(&self) -> &CompanyConfig {
        self.config.company()
    }
}
