//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;

use crate::session::Stage;

/// Errors emitted by the quiz backend client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("backend reported failure: {0}")]
    Backend(String),
    #[error("upload response did not include a document id")]
    MissingDocId,
    #[error("malformed question in response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error("invalid api base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by session state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("operation requires the {expected:?} stage, session is in {actual:?}")]
    WrongStage { expected: Stage, actual: Stage },
    #[error("answer count {answers} does not match question count {questions}")]
    AnswerCountMismatch { questions: usize, answers: usize },
}
