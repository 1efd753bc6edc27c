//! HTTP request handlers for the offer engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{allocate_annual_ctc, compute_breakdown};
use crate::error::OfferResult;
use crate::form::{LetterDetails, apply_updates};
use crate::models::{CompensationInput, OfferLetter};
use crate::presentation::SalaryTable;

use super::request::{AllocationRequest, LetterUpdateRequest};
use super::response::{ApiError, ApiErrorResponse, OfferLetterResponse, SessionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/compensation/breakdown", post(breakdown_handler))
        .route("/compensation/allocate", post(allocate_handler))
        .route("/offer-letters", post(generate_handler))
        .route("/offer-letters/table", post(table_handler))
        .route("/offer-letters/update", post(update_handler))
        .with_state(state)
}

/// Unwraps a JSON body or builds the 400 response for it.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
}

/// Turns a handler result into a response, logging failures.
fn respond<T: Serialize>(result: OfferResult<T>, correlation_id: Uuid) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /login.
///
/// Opens the session gate; no credentials are checked.
async fn login_handler(State(state): State<AppState>) -> Json<SessionResponse> {
    state.session().login();
    info!("Session opened");
    Json(SessionResponse {
        authenticated: true,
    })
}

/// Handler for POST /logout.
async fn logout_handler(State(state): State<AppState>) -> Json<SessionResponse> {
    state.session().logout();
    info!("Session closed");
    Json(SessionResponse {
        authenticated: false,
    })
}

/// Handler for POST /compensation/breakdown.
async fn breakdown_handler(payload: Result<Json<CompensationInput>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let breakdown = compute_breakdown(&input);
    info!(
        correlation_id = %correlation_id,
        bonuses = input.bonuses.len(),
        final_annual_total = %breakdown.final_annual_total,
        "Computed compensation breakdown"
    );
    respond(Ok(breakdown), correlation_id)
}

/// Handler for POST /compensation/allocate.
///
/// Responds with `null` when the annual CTC is zero or blank.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let split = allocate_annual_ctc(&request.annual_ctc, state.config().allocation());
    info!(
        correlation_id = %correlation_id,
        annual_ctc = %request.annual_ctc,
        allocated = split.is_some(),
        "Allocated annual CTC"
    );
    respond(Ok(split), correlation_id)
}

/// Handler for POST /offer-letters/table.
async fn table_handler(
    State(state): State<AppState>,
    payload: Result<Json<OfferLetter>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let letter = match parse_json(payload, correlation_id) {
        Ok(letter) => letter,
        Err(response) => return response,
    };

    let result = state.session().require().map(|()| {
        let breakdown = compute_breakdown(&letter.compensation_input());
        SalaryTable::build(&letter.employee_name, &letter.position, &breakdown)
    });
    respond(result, correlation_id)
}

/// Handler for POST /offer-letters/update.
async fn update_handler(
    State(state): State<AppState>,
    payload: Result<Json<LetterUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.session().require().and_then(|()| {
        apply_updates(
            &request.letter,
            request.updates,
            state.config().allocation(),
        )
    });
    respond(result, correlation_id)
}

/// Handler for POST /offer-letters.
///
/// Validates the required fields and returns everything the document export
/// needs: resolved letter text, breakdown, annexure table and file name.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<OfferLetter>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing offer letter request");

    let letter = match parse_json(payload, correlation_id) {
        Ok(letter) => letter,
        Err(response) => return response,
    };

    let result = generate_letter(&state, &letter);
    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            letter_id = %response.id,
            file_name = %response.file_name,
            final_annual_total = %response.breakdown.final_annual_total,
            "Offer letter generated"
        );
    }
    respond(result, correlation_id)
}

fn generate_letter(state: &AppState, letter: &OfferLetter) -> OfferResult<OfferLetterResponse> {
    state.session().require()?;
    letter.validate()?;

    let generated_at = Utc::now();
    let breakdown = compute_breakdown(&letter.compensation_input());
    let table = SalaryTable::build(&letter.employee_name, &letter.position, &breakdown);
    let details = LetterDetails::resolve(letter, state.config().company(), generated_at.date_naive());

    Ok(OfferLetterResponse {
        id: Uuid::new_v4(),
        generated_at,
        file_name: letter.file_name(),
        details,
        breakdown,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default())
    }

    async fn post(router: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, body) = post(router, "/compensation/breakdown", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/compensation/allocate")
                    .body(Body::from(r#"{"annual_ctc": "650000"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_allocate_missing_field_is_validation_error() {
        let router = create_router(create_test_state());

        let (status, body) = post(router, "/compensation/allocate", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_requires_login() {
        let router = create_router(create_test_state());

        let (status, body) = post(router, "/offer-letters", "{}").await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "NOT_AUTHENTICATED");
    }

    #[tokio::test]
    async fn test_generate_reports_missing_field_after_login() {
        let state = create_test_state();
        state.session().login();
        let router = create_router(state);

        let (status, body) = post(router, "/offer-letters", r#"{"employee_name": "Roshan Saroj"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MISSING_FIELD");
        assert!(body["message"].as_str().unwrap().contains("position"));
    }
}
