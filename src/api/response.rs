//! Response types for the offer engine API.
//!
//! This module defines the success bodies and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OfferError;
use crate::form::LetterDetails;
use crate::models::CompensationBreakdown;
use crate::presentation::SalaryTable;

/// Response body for `/offer-letters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferLetterResponse {
    /// Unique identifier for this generation.
    pub id: Uuid,
    /// When the letter was generated.
    pub generated_at: DateTime<Utc>,
    /// Suggested download name.
    pub file_name: String,
    /// Resolved letter text.
    pub details: LetterDetails,
    /// Computed compensation figures.
    pub breakdown: CompensationBreakdown,
    /// The annexure table.
    pub table: SalaryTable,
}

/// Response body for `/login` and `/logout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Whether the session is now logged in.
    pub authenticated: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<OfferError> for ApiErrorResponse {
    fn from(error: OfferError) -> Self {
        let message = error.to_string();
        match error {
            OfferError::ConfigNotFound { .. }
            | OfferError::ConfigParseError { .. }
            | OfferError::InvalidAllocation { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            OfferError::MissingField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_FIELD",
                    message,
                    format!(
                        "Please fill in '{}' before generating the offer letter",
                        field
                    ),
                ),
            },
            OfferError::UnknownField { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("UNKNOWN_FIELD", message),
            },
            OfferError::BonusIndexOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("BONUS_NOT_FOUND", message),
            },
            OfferError::NotAuthenticated => ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::with_details(
                    "NOT_AUTHENTICATED",
                    message,
                    "POST /login before using the offer form",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_missing_field_maps_to_bad_request() {
        let api_error: ApiErrorResponse = OfferError::MissingField {
            field: "employee_name".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MISSING_FIELD");
        assert!(api_error.error.message.contains("employee_name"));
    }

    #[test]
    fn test_not_authenticated_maps_to_unauthorized() {
        let api_error: ApiErrorResponse = OfferError::NotAuthenticated.into();

        assert_eq!(api_error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api_error.error.code, "NOT_AUTHENTICATED");
    }

    #[test]
    fn test_config_errors_map_to_internal_error() {
        let api_error: ApiErrorResponse = OfferError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
