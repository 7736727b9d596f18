use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::info;

use crate::models::quote::QuoteRequest;

/// Delivers a validated quote request somewhere it can be acted on.
#[async_trait]
pub trait QuoteSubmitter: Send + Sync {
    async fn submit(&self, quote: &QuoteRequest) -> Result<(), SubmissionError>;

    /// Short name for logs and metrics labels.
    fn kind(&self) -> &'static str;
}

/// Stands in for a backend: waits, logs, and always succeeds.
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl QuoteSubmitter for SimulatedSubmitter {
    async fn submit(&self, quote: &QuoteRequest) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        info!(
            service = %quote.service_needed(),
            property_type = %quote.property_type(),
            "Quote request received (simulated delivery)"
        );
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "simulated"
    }
}

/// Posts quote requests as JSON to a configured endpoint.
pub struct WebhookSubmitter {
    http: Client,
    endpoint: url::Url,
}

impl WebhookSubmitter {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SubmissionError> {
        let endpoint = url::Url::parse(endpoint)
            .map_err(|e| SubmissionError::Config(format!("invalid webhook URL: {e}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SubmissionError::Transport)?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl QuoteSubmitter for WebhookSubmitter {
    async fn submit(&self, quote: &QuoteRequest) -> Result<(), SubmissionError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(quote)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::Timeout
                } else {
                    SubmissionError::Transport(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected { status });
        }

        info!(
            service = %quote.service_needed(),
            property_type = %quote.property_type(),
            "Quote request delivered to webhook"
        );
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "webhook"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Quote endpoint did not respond in time")]
    Timeout,

    #[error("Quote endpoint rejected the request with status {status}")]
    Rejected { status: StatusCode },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Submitter configuration error: {0}")]
    Config(String),
}

impl SubmissionError {
    /// Metrics label for the failure class.
    pub fn reason(&self) -> &'static str {
        match self {
            SubmissionError::Timeout => "timeout",
            SubmissionError::Rejected { .. } => "rejected",
            SubmissionError::Transport(_) => "transport",
            SubmissionError::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quote::QuoteInput;
    use crate::services::validation::validate_quote;
    use httpmock::prelude::*;

    fn sample_request() -> QuoteRequest {
        validate_quote(&QuoteInput {
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "5208428930".to_string(),
            address: "12 Palm Ave, Tucson, AZ".to_string(),
            property_type: "commercial".to_string(),
            service_needed: "HVAC Maintenance".to_string(),
            message: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_simulated_submitter_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(30));
        let started = std::time::Instant::now();
        submitter.submit(&sample_request()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert_eq!(submitter.kind(), "simulated");
    }

    #[tokio::test]
    async fn test_webhook_posts_camel_case_json() {
        let server = MockServer::start_async().await;
        let hook = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/quotes")
                    .json_body_partial(r#"{"propertyType":"commercial","serviceNeeded":"HVAC Maintenance"}"#);
                then.status(202);
            })
            .await;

        let submitter = WebhookSubmitter::new(&server.url("/quotes"), Duration::from_secs(5)).unwrap();
        submitter.submit(&sample_request()).await.unwrap();
        hook.assert_async().await;
    }

    #[tokio::test]
    async fn test_webhook_non_success_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/quotes");
                then.status(429);
            })
            .await;

        let submitter = WebhookSubmitter::new(&server.url("/quotes"), Duration::from_secs(5)).unwrap();
        let err = submitter.submit(&sample_request()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Rejected { status } if status == StatusCode::TOO_MANY_REQUESTS));
        assert_eq!(err.reason(), "rejected");
    }

    #[tokio::test]
    async fn test_webhook_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/quotes");
                then.status(200).delay(Duration::from_millis(500));
            })
            .await;

        let submitter = WebhookSubmitter::new(&server.url("/quotes"), Duration::from_millis(50)).unwrap();
        let err = submitter.submit(&sample_request()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Timeout));
    }

    #[test]
    fn test_invalid_webhook_url() {
        let err = WebhookSubmitter::new("not a url", Duration::from_secs(1)).err().unwrap();
        assert_eq!(err.reason(), "config");
    }
}
