//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizError;
use quiz_core::model::IdentityError;

/// Errors emitted while retrieving questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("question source returned HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("question source returned response code {0}")]
    ResponseCode(i64),
    #[error("question source returned no questions")]
    EmptyBatch,
    #[error("question source payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while building `QuizConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid question source endpoint {raw:?}: {source}")]
    InvalidEndpoint {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("question count must be between 1 and 50, got {0}")]
    InvalidQuestionCount(u8),
    #[error("time limit must be greater than zero")]
    ZeroTimeLimit,
}

/// Errors emitted by the session runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz session has shut down")]
    Closed,
    #[error(transparent)]
    Rejected(#[from] quiz_core::Error),
}

impl From<QuizError> for SessionError {
    fn from(err: QuizError) -> Self {
        Self::Rejected(err.into())
    }
}

impl From<IdentityError> for SessionError {
    fn from(err: IdentityError) -> Self {
        Self::Rejected(err.into())
    }
}
