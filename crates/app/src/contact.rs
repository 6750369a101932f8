#![forbid(unsafe_code)]

use crate::FetchError;
use ld_core::form::{
    self, ContactInput, ContactSubmission, FieldError, PortfolioVerdict, SubmissionTracker,
};

/// Delivers a validated message somewhere.
pub trait FormSubmitter {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<(), FetchError>;
}

impl<F> FormSubmitter for F
where
    F: FnMut(&ContactSubmission) -> Result<(), FetchError>,
{
    fn submit(&mut self, submission: &ContactSubmission) -> Result<(), FetchError> {
        self(submission)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormVariant {
    /// Every field checked, all errors shown at once.
    #[default]
    Strict,
    /// Honeypot plus first-failure-wins checks.
    Portfolio,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactReport {
    /// Status line under the form; `None` means nothing is shown.
    pub status: Option<String>,
    pub field_errors: Vec<FieldError>,
    pub sent: bool,
}

pub struct ContactDesk<S> {
    variant: FormVariant,
    submitter: S,
    tracker: SubmissionTracker,
}

impl<S: FormSubmitter> ContactDesk<S> {
    pub fn new(variant: FormVariant, submitter: S) -> Self {
        Self {
            variant,
            submitter,
            tracker: SubmissionTracker::default(),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn tracker(&self) -> &SubmissionTracker {
        &self.tracker
    }

    /// Validates and hands the message to the submitter. Refused while a
    /// previous submission is still in flight.
    pub fn submit(&mut self, input: &ContactInput) -> ContactReport {
        let submission = match self.variant {
            FormVariant::Strict => match form::validate_strict(input) {
                Ok(submission) => submission,
                Err(field_errors) => {
                    return ContactReport {
                        status: Some(form::FIX_ERRORS.to_string()),
                        field_errors,
                        sent: false,
                    };
                }
            },
            FormVariant::Portfolio => match form::validate_portfolio(input) {
                PortfolioVerdict::Accepted(submission) => submission,
                PortfolioVerdict::Spam => {
                    tracing::debug!("honeypot filled; submission dropped");
                    return ContactReport::default();
                }
                PortfolioVerdict::Rejected(message) => {
                    return ContactReport {
                        status: Some(message.to_string()),
                        ..ContactReport::default()
                    };
                }
            },
        };

        if !self.tracker.begin() {
            return ContactReport::default();
        }
        let result = self.submitter.submit(&submission);
        self.tracker.finish(result.is_ok());
        match result {
            Ok(()) => ContactReport {
                status: Some(self.success_message().to_string()),
                field_errors: Vec::new(),
                sent: true,
            },
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                ContactReport {
                    status: Some(form::SEND_FAILED.to_string()),
                    ..ContactReport::default()
                }
            }
        }
    }

    fn success_message(&self) -> &'static str {
        match self.variant {
            FormVariant::Strict => form::SUBMITTED,
            FormVariant::Portfolio => form::THANK_YOU,
        }
    }
}
