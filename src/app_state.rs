use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::submission::{
    QuoteSubmitter, SimulatedSubmitter, SubmissionError, WebhookSubmitter,
};

/// Shared application state passed to all route handlers.
///
/// Read-only after startup. Form state is never stored here; every request
/// builds its own `QuoteForm`.
#[derive(Clone)]
pub struct AppState {
    pub submitter: Arc<dyn QuoteSubmitter>,
}

impl AppState {
    pub fn new(submitter: Arc<dyn QuoteSubmitter>) -> Self {
        Self { submitter }
    }

    /// Pick the quote submitter the configuration asks for.
    pub fn from_config(config: &AppConfig) -> Result<Self, SubmissionError> {
        let submitter: Arc<dyn QuoteSubmitter> = match &config.quote_webhook_url {
            Some(url) => {
                tracing::info!(url = %url, "Delivering quote requests to webhook");
                Arc::new(WebhookSubmitter::new(url, config.webhook_timeout())?)
            }
            None => {
                tracing::info!(
                    delay_ms = config.quote_submit_delay_ms,
                    "No quote webhook configured, using simulated delivery"
                );
                Arc::new(SimulatedSubmitter::new(config.submit_delay()))
            }
        };
        Ok(Self::new(submitter))
    }
}
