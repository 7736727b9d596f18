//! HTML quote form over POST /contact.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use freshair_site::models::quote::{PropertyType, ServiceKind};
use helpers::*;

#[tokio::test]
async fn test_valid_form_succeeds_and_clears_fields() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let (status, html) = post_form(app_with(submitter.clone()), VALID_FORM).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Thank you! We'll contact you within 2 hours."));
    assert!(!html.contains("Dana Reyes"));
    assert!(!html.contains("field-error"));
    assert!(html.contains(r#"<input id="name" name="name" type="text" value="">"#));

    assert_eq!(submitter.calls(), 1);
    let request = submitter.last().unwrap();
    assert_eq!(request.name(), "Dana Reyes");
    assert_eq!(request.email(), "user@example.com");
    assert_eq!(request.property_type(), PropertyType::Residential);
    assert_eq!(request.service_needed(), ServiceKind::ResidentialDuctCleaning);
    assert_eq!(request.message(), Some("Dusty vents"));
}

#[tokio::test]
async fn test_submission_fault_keeps_values_and_shows_error_banner() {
    let submitter = Arc::new(RecordingSubmitter::failing());
    let (status, html) = post_form(app_with(submitter.clone()), VALID_FORM).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Something went wrong. Please try again or call us directly."));
    assert!(html.contains(r#"value="Dana Reyes""#));
    assert!(html.contains(r#"value="user@example.com""#));
    assert!(html.contains(r#"<option value="residential" selected>"#));
    assert!(html.contains("Dusty vents</textarea>"));
    assert_eq!(submitter.calls(), 1);
}

#[tokio::test]
async fn test_invalid_form_reports_only_violating_fields() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let body = VALID_FORM
        .replace("name=Dana+Reyes", "name=A")
        .replace("phone=5208428930", "phone=123");
    let (status, html) = post_form(app_with(submitter.clone()), &body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Name must be at least 2 characters"));
    assert!(html.contains("Please enter a valid phone number"));
    assert_eq!(html.matches(r#"<p class="field-error""#).count(), 2);
    assert!(!html.contains("class=\"banner"));
    assert_eq!(submitter.calls(), 0);
}

#[tokio::test]
async fn test_missing_selects_are_field_errors() {
    let submitter = Arc::new(RecordingSubmitter::default());
    let body = "name=Al&email=user%40example.com&phone=5208428930&address=12+Palm+Ave&propertyType=&serviceNeeded=";
    let (status, html) = post_form(app_with(submitter.clone()), body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Please select a property type"));
    assert!(html.contains("Please select a service"));
    assert_eq!(submitter.calls(), 0);
}

#[tokio::test]
async fn test_repeat_submissions_are_independent() {
    let submitter = Arc::new(RecordingSubmitter::default());

    let (first, _) = post_form(app_with(submitter.clone()), VALID_FORM).await;
    let (second, _) = post_form(app_with(submitter.clone()), VALID_FORM).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(submitter.calls(), 2);
}
