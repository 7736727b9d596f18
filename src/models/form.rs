use tracing::{info, warn};

use crate::models::quote::{QuoteInput, QuoteRequest};
use crate::services::submission::{QuoteSubmitter, SubmissionError};
use crate::services::validation::{validate_quote, FieldErrors};

pub const SUCCESS_BANNER: &str = "Thank you! We'll contact you within 2 hours.";
pub const ERROR_BANNER: &str = "Something went wrong. Please try again or call us directly.";

/// Lifecycle of one quote form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Banner shown after a submission attempt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error,
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Banner::Success => SUCCESS_BANNER,
            Banner::Error => ERROR_BANNER,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("Submission failed: {0}")]
    Submission(#[from] SubmissionError),
}

/// A quote form: entered values, per-field errors and submission status.
///
/// Each page render owns its own instance; nothing here is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteForm {
    values: QuoteInput,
    errors: FieldErrors,
    status: FormStatus,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::with_values(QuoteInput::default())
    }

    pub fn with_values(values: QuoteInput) -> Self {
        Self {
            values,
            errors: FieldErrors::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn values(&self) -> &QuoteInput {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Replace the entered values. Ignored while a submission is in flight.
    pub fn set_values(&mut self, values: QuoteInput) {
        if self.status != FormStatus::Submitting {
            self.values = values;
        }
    }

    /// Validate the current values and, if they pass, move to `Submitting`.
    ///
    /// Invalid values put the form back in `Idle` with per-field messages.
    pub fn begin_submit(&mut self) -> Result<QuoteRequest, FormError> {
        if self.status == FormStatus::Submitting {
            return Err(FormError::InFlight);
        }

        match validate_quote(&self.values) {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.status = FormStatus::Submitting;
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.status = FormStatus::Idle;
                Err(FormError::Invalid(errors))
            }
        }
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Success clears the entered values; failure keeps them for a retry.
    pub fn resolve(&mut self, outcome: &Result<(), SubmissionError>) {
        if self.status != FormStatus::Submitting {
            warn!(status = ?self.status, "Resolve called with no submission in flight");
            return;
        }

        match outcome {
            Ok(()) => {
                self.values = QuoteInput::default();
                self.status = FormStatus::Succeeded;
            }
            Err(e) => {
                self.status = FormStatus::Failed(e.to_string());
            }
        }
    }

    /// Validate, deliver through `submitter` and resolve, in one call.
    pub async fn submit_with(&mut self, submitter: &dyn QuoteSubmitter) -> Result<(), FormError> {
        let request = self.begin_submit()?;

        let started = std::time::Instant::now();
        let outcome = submitter.submit(&request).await;
        metrics::histogram!("quote_submission_seconds", "submitter" => submitter.kind())
            .record(started.elapsed().as_secs_f64());

        match &outcome {
            Ok(()) => info!(
                submitter = submitter.kind(),
                service = %request.service_needed(),
                "Quote submission succeeded"
            ),
            Err(e) => warn!(
                submitter = submitter.kind(),
                reason = e.reason(),
                error = %e,
                "Quote submission failed"
            ),
        }

        self.resolve(&outcome);
        outcome.map_err(FormError::from)
    }

    /// Banner for the current status, if one should be shown.
    pub fn banner(&self) -> Option<Banner> {
        match self.status {
            FormStatus::Succeeded => Some(Banner::Success),
            FormStatus::Failed(_) => Some(Banner::Error),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }
}
