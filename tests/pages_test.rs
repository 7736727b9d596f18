//! Page routes, health and fallback.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use helpers::*;

#[tokio::test]
async fn test_pages_render_with_shared_layout() {
    for (uri, heading) in [
        ("/", "<h1>Fresh Air Duct Cleaning</h1>"),
        ("/services", "<h1>Our Services</h1>"),
        ("/contact", "<h1>Contact Us</h1>"),
    ] {
        let (status, html) = get(app_with(Arc::new(RecordingSubmitter::default())), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(html.contains(heading), "{uri}");
        assert!(html.contains(r#"class="site-header""#), "{uri}");
        assert!(html.contains(r#"class="site-footer""#), "{uri}");
        assert!(html.contains(&format!(r#"<a href="{uri}" class="active">"#)), "{uri}");
    }
}

#[tokio::test]
async fn test_contact_page_starts_idle() {
    let (_, html) = get(app_with(Arc::new(RecordingSubmitter::default())), "/contact").await;
    assert!(html.contains(r#"<form method="post" action="/contact""#));
    assert!(!html.contains("class=\"banner"));
    assert!(!html.contains("field-error"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, html) = get(app_with(Arc::new(RecordingSubmitter::default())), "/pricing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page Not Found"));
}

#[tokio::test]
async fn test_health_reports_submitter() {
    let (status, body) = get(app_with(Arc::new(RecordingSubmitter::default())), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["submitter"], "recording");
}
