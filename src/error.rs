//! Error types for the offer engine.
//!
//! The compensation calculator itself never fails: malformed amounts degrade
//! to zero. Errors only arise at the edges of the crate, when loading
//! configuration, validating a letter before generation, or applying a
//! field-keyed form update.

use thiserror::Error;

/// The main error type for the offer engine.
///
/// # Example
///
/// ```
/// use offer_engine::error::OfferError;
///
/// let error = OfferError::MissingField {
///     field: "employee_name".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: employee_name");
/// ```
#[derive(Debug, Error)]
pub enum OfferError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The salary allocation ratios are not usable.
    #[error("Invalid allocation ratios: {message}")]
    InvalidAllocation {
        /// A description of what made the ratios invalid.
        message: String,
    },

    /// A field required to generate a letter was left blank.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the blank field.
        field: String,
    },

    /// A field-keyed update named a field the form does not have.
    #[error("Unknown form field: {field}")]
    UnknownField {
        /// The key that did not match any field.
        field: String,
    },

    /// A bonus update addressed a row that does not exist.
    #[error("Bonus index {index} out of range (form has {len} bonuses)")]
    BonusIndexOutOfRange {
        /// The requested row.
        index: usize,
        /// The number of bonus rows on the form.
        len: usize,
    },

    /// The session gate is closed.
    #[error("Login required")]
    NotAuthenticated,
}

/// A type alias for Results that return OfferError.
pub type OfferResult<T> = Result<T, OfferError>;
