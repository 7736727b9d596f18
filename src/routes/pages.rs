use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;

use crate::app_state::AppState;
use crate::models::form::{FormError, QuoteForm};
use crate::models::quote::QuoteInput;
use crate::views;

/// GET / — home page.
pub async fn home() -> Html<String> {
    Html(views::home::render())
}

/// GET /services — service catalogue, pricing and FAQs.
pub async fn services() -> Html<String> {
    Html(views::services::render())
}

/// GET /contact — contact page with an empty quote form.
pub async fn contact() -> Html<String> {
    Html(views::contact::render(&QuoteForm::new()))
}

/// POST /contact — validate and submit the quote form, then re-render it
/// with field errors or the outcome banner.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(input): Form<QuoteInput>,
) -> (StatusCode, Html<String>) {
    let mut form = QuoteForm::with_values(input);

    let (status, outcome) = match form.submit_with(state.submitter.as_ref()).await {
        Ok(()) => (StatusCode::OK, "success"),
        Err(FormError::Invalid(errors)) => {
            tracing::debug!(%errors, "Quote form rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, "invalid")
        }
        Err(FormError::Submission(_)) => (StatusCode::BAD_GATEWAY, "failed"),
        Err(FormError::InFlight) => (StatusCode::CONFLICT, "in_flight"),
    };
    metrics::counter!("quote_requests_total", "channel" => "form", "outcome" => outcome).increment(1);

    (status, Html(views::contact::render(&form)))
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}
