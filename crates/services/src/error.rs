//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::QuestionError;

/// Errors emitted by `QuestionSource` when talking to the provider.
///
/// Callers that go through `fetch_exam` never see these; the source falls
/// back to the bundled question bank instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question provider is not configured")]
    Disabled,

    #[error("question provider returned an empty batch")]
    EmptyResponse,

    #[error("question provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("question provider returned malformed JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("question provider sent an unknown domain label: {0}")]
    UnknownDomain(String),

    #[error(transparent)]
    InvalidQuestion(#[from] QuestionError),
}
