//! Configuration types for offer generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{OfferError, OfferResult};

/// The percentage split used to derive monthly components from an annual CTC.
///
/// Basic pay and HRA take fixed shares of the monthly CTC; the special
/// allowance receives whatever is left, including rounding residue.
///
/// # Example
///
/// ```
/// use offer_engine::config::AllocationConfig;
/// use rust_decimal::Decimal;
///
/// let allocation = AllocationConfig::default();
/// assert_eq!(allocation.basic_ratio(), Decimal::new(4615, 4));
/// assert_eq!(allocation.hra_ratio(), Decimal::new(1487, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationConfig {
    basic_ratio: Decimal,
    hra_ratio: Decimal,
}

impl AllocationConfig {
    /// Creates an allocation from explicit ratios.
    ///
    /// Returns `InvalidAllocation` if either ratio is negative or if together
    /// they leave nothing for the special allowance to absorb.
    pub fn new(basic_ratio: Decimal, hra_ratio: Decimal) -> OfferResult<Self> {
        let allocation = Self {
            basic_ratio,
            hra_ratio,
        };
        allocation.validate()?;
        Ok(allocation)
    }

    /// Checks that the ratios describe a usable split.
    pub fn validate(&self) -> OfferResult<()> {
        if self.basic_ratio.is_sign_negative() || self.hra_ratio.is_sign_negative() {
            return Err(OfferError::InvalidAllocation {
                message: format!(
                    "ratios must not be negative (basic {}, hra {})",
                    self.basic_ratio, self.hra_ratio
                ),
            });
        }
        if self.basic_ratio + self.hra_ratio > Decimal::ONE {
            return Err(OfferError::InvalidAllocation {
                message: format!(
                    "basic {} + hra {} exceeds 1",
                    self.basic_ratio, self.hra_ratio
                ),
            });
        }
        Ok(())
    }

    /// Share of the monthly CTC paid as basic pay.
    pub fn basic_ratio(&self) -> Decimal {
        self.basic_ratio
    }

    /// Share of the monthly CTC paid as house rent allowance.
    pub fn hra_ratio(&self) -> Decimal {
        self.hra_ratio
    }

    /// Nominal share left for the special allowance.
    pub fn special_ratio(&self) -> Decimal {
        Decimal::ONE - self.basic_ratio - self.hra_ratio
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            basic_ratio: Decimal::new(4615, 4),
            hra_ratio: Decimal::new(1487, 4),
        }
    }
}

/// Company-level defaults printed on generated letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Legal name of the issuing company.
    pub name: String,
    /// Signatory title used when the form leaves it blank.
    pub default_signatory_title: String,
    /// Signatory name used when the form leaves it blank.
    pub default_signatory_name: String,
    /// Probation wording used when the form leaves it blank.
    pub default_probation: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "CodesmoTech Technology Consulting Private Limited".to_string(),
            default_signatory_title: "VP, Operations and Finance".to_string(),
            default_signatory_name: "Rahul Sharma".to_string(),
            default_probation: "six (6)".to_string(),
        }
    }
}

/// The complete offer configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct OfferConfig {
    allocation: AllocationConfig,
    company: CompanyConfig,
}

impl OfferConfig {
    /// Creates a new OfferConfig from its component parts.
    pub fn new(allocation: AllocationConfig, company: CompanyConfig) -> Self {
        Self {
            allocation,
            company,
        }
    }

    /// Returns the salary allocation ratios.
    pub fn allocation(&self) -> &AllocationConfig {
        &self.allocation
    }

    /// Returns the company defaults.
    pub fn company(&self) -> &CompanyConfig {
        &self.company
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_allocation_leaves_remainder_for_special() {
        let allocation = AllocationConfig::default();
        assert_eq!(allocation.special_ratio(), dec("0.3898"));
    }

    #[test]
    fn test_new_accepts_valid_ratios() {
        let allocation = AllocationConfig::new(dec("0.5"), dec("0.2")).unwrap();
        assert_eq!(allocation.basic_ratio(), dec("0.5"));
        assert_eq!(allocation.hra_ratio(), dec("0.2"));
    }

    #[test]
    fn test_new_rejects_ratios_above_one() {
        let result = AllocationConfig::new(dec("0.8"), dec("0.3"));
        match result {
            Err(OfferError::InvalidAllocation { message }) => {
                assert!(message.contains("exceeds 1"));
            }
            other => panic!("Expected InvalidAllocation, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_negative_ratio() {
        let result = AllocationConfig::new(dec("-0.1"), dec("0.3"));
        assert!(matches!(result, Err(OfferError::InvalidAllocation { .. })));
    }

    #[test]
    fn test_allocation_deserializes_from_yaml_strings() {
        let yaml = "basic_ratio: \"0.4615\"\nhra_ratio: \"0.1487\"\n";
        let allocation: AllocationConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(allocation, AllocationConfig::default());
    }
}
