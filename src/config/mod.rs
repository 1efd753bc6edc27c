//! Configuration loading and management for the offer engine.
//!
//! This module loads the salary allocation ratios and company letter
//! defaults from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use offer_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Basic share: {}", config.allocation().basic_ratio());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllocationConfig, CompanyConfig, OfferConfig};
