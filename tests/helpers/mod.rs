//! Shared helpers for driving the router in-process.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use freshair_site::app_state::AppState;
use freshair_site::models::quote::QuoteRequest;
use freshair_site::routes;
use freshair_site::services::submission::{QuoteSubmitter, SubmissionError};

/// Submitter that records what it received and succeeds or fails on demand.
#[derive(Default)]
pub struct RecordingSubmitter {
    pub fail: bool,
    calls: AtomicUsize,
    last: std::sync::Mutex<Option<QuoteRequest>>,
}

impl RecordingSubmitter {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<QuoteRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteSubmitter for RecordingSubmitter {
    async fn submit(&self, quote: &QuoteRequest) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(quote.clone());
        if self.fail {
            Err(SubmissionError::Config("endpoint unavailable".to_string()))
        } else {
            Ok(())
        }
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}

pub fn app_with(submitter: Arc<RecordingSubmitter>) -> Router {
    routes::router(AppState::new(submitter))
}

pub const VALID_FORM: &str = "name=Dana+Reyes&email=user%40example.com&phone=5208428930\
&address=12+Palm+Ave%2C+Tucson%2C+AZ&propertyType=residential\
&serviceNeeded=Residential+Duct+Cleaning&message=Dusty+vents";

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

pub async fn post_form(app: Router, body: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    post_raw(app, "application/json", &body.to_string()).await
}

/// POST an arbitrary body to the quote API; the response must still be JSON.
pub async fn post_raw(app: Router, content_type: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/quotes")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, text) = send(app, req).await;
    let json = serde_json::from_str(&text).unwrap_or_else(|e| panic!("non-JSON body {text:?}: {e}"));
    (status, json)
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
