//! Shared error types for the services crate.

use thiserror::Error;

use tutor_core::PayloadError;
use tutor_core::model::{QuizRuleError, ToastDraft};

/// Errors emitted by `TutorApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorApiError {
    #[error("tutor backend responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("tutor backend returned a malformed payload: {0}")]
    Payload(#[from] PayloadError),
}

impl TutorApiError {
    /// Shape errors get a format notice; everything else is a transport failure.
    #[must_use]
    pub fn is_payload(&self) -> bool {
        matches!(self, Self::Payload(_))
    }
}

/// Which backend call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiAction {
    FetchQuestion,
    SubmitAnswer,
}

/// Errors emitted by `QuizController`. Every variant maps to a toast.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Rule(#[from] QuizRuleError),
    #[error("{action:?} failed: {source}")]
    Api {
        action: ApiAction,
        #[source]
        source: TutorApiError,
    },
}

impl QuizError {
    /// The user-visible notice for this failure.
    #[must_use]
    pub fn notice(&self) -> ToastDraft {
        match self {
            QuizError::Rule(rule) => ToastDraft::new("Error")
                .description(rule.to_string())
                .destructive(),
            QuizError::Api { action, source } => {
                let description = match (action, source.is_payload()) {
                    (_, true) => "Received an invalid response format. Please try again.",
                    (ApiAction::FetchQuestion, false) => {
                        "Failed to fetch question. Please try again."
                    }
                    (ApiAction::SubmitAnswer, false) => {
                        "Failed to submit answer. Please try again."
                    }
                };
                ToastDraft::new("Error").description(description).destructive()
            }
        }
    }
}
