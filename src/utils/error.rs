// src/utils/error.rs
use thiserror::Error;

/// Errors surfaced by the caller-facing summarize wrapper.
/// The algorithm itself never fails; these describe the request boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("No text provided.")]
    InvalidInput, // missing, non-string or empty `text`

    #[error("Failed to generate summary.")]
    UnexpectedFailure(String), // detail is logged, never shown to the caller
}

impl RequestError {
    /// HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::InvalidInput => 400,
            RequestError::UnexpectedFailure(_) => 500,
        }
    }
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Summarization failed: {0}")]
    Request(#[from] RequestError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_request_errors() {
        assert_eq!(RequestError::InvalidInput.status_code(), 400);
        assert_eq!(RequestError::UnexpectedFailure("boom".into()).status_code(), 500);
    }

    #[test]
    fn unexpected_failure_hides_detail() {
        let err = RequestError::UnexpectedFailure("index out of bounds".into());
        assert_eq!(err.to_string(), "Failed to generate summary.");
    }

    #[test]
    fn app_error_wraps_request_error() {
        let err: AppError = RequestError::InvalidInput.into();
        assert_eq!(err.to_string(), "Summarization failed: No text provided.");
    }
}
