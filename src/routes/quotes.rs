use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::form::{FormError, QuoteForm, ERROR_BANNER, SUCCESS_BANNER};
use crate::models::quote::QuoteInput;
use crate::services::validation::FieldErrors;

/// Response body for the JSON quote endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum QuoteResponse {
    Received { message: String },
    Invalid { error: String, fields: FieldErrors },
    /// The body could not be read as a quote at all (bad JSON, wrong
    /// field types, wrong content type).
    Malformed { error: String },
    Failed { error: String },
}

/// POST /api/v1/quotes — JSON variant of the quote form.
pub async fn submit_quote(
    State(state): State<AppState>,
    payload: Result<Json<QuoteInput>, JsonRejection>,
) -> (StatusCode, Json<QuoteResponse>) {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Quote body rejected");
            metrics::counter!("quote_requests_total", "channel" => "api", "outcome" => "malformed")
                .increment(1);
            return (
                rejection.status(),
                Json(QuoteResponse::Malformed { error: rejection.body_text() }),
            );
        }
    };
    let mut form = QuoteForm::with_values(input);

    let (status, outcome, body) = match form.submit_with(state.submitter.as_ref()).await {
        Ok(()) => (
            StatusCode::CREATED,
            "success",
            QuoteResponse::Received { message: SUCCESS_BANNER.to_string() },
        ),
        Err(FormError::Invalid(fields)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid",
            QuoteResponse::Invalid {
                error: "Please correct the highlighted fields".to_string(),
                fields,
            },
        ),
        Err(FormError::Submission(_)) => (
            StatusCode::BAD_GATEWAY,
            "failed",
            QuoteResponse::Failed { error: ERROR_BANNER.to_string() },
        ),
        Err(e @ FormError::InFlight) => (
            StatusCode::CONFLICT,
            "in_flight",
            QuoteResponse::Failed { error: e.to_string() },
        ),
    };
    metrics::counter!("quote_requests_total", "channel" => "api", "outcome" => outcome).increment(1);

    (status, Json(body))
}
