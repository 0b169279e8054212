use http::StatusCode;
use thiserror::Error;

use crate::fingerprint::ExtractError;

/// HTTP result type, T is typically a hyper::Response
/// HttpError is turned into a synthetic error response for that request only
pub type HttpResult<T> = std::result::Result<T, HttpError>;

/// Describes things that can go wrong while answering a request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("No route for path: {0}")]
    NotFound(String),

    #[error("Failed to read request attributes: {0}")]
    InvalidRequestAttributes(String),

    #[error("Failed to generate response: {0}")]
    FailedToGenerateResponse(String),
}

impl HttpError {
    /// Metrics label for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            HttpError::NotFound(_) => "not_found",
            HttpError::InvalidRequestAttributes(_) => "invalid_request_attributes",
            HttpError::FailedToGenerateResponse(_) => "response_generation",
        }
    }
}

impl From<HttpError> for StatusCode {
    fn from(e: HttpError) -> StatusCode {
        match e {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::InvalidRequestAttributes(_) | HttpError::FailedToGenerateResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ExtractError> for HttpError {
    fn from(e: ExtractError) -> Self {
        HttpError::InvalidRequestAttributes(e.to_string())
    }
}
