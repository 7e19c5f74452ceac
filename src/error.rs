use thiserror::Error;

/// Failures of the one extraction pipeline run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The service reported failure, or the request never completed.
    #[error("Failed to scrape: {message}")]
    ExtractionFailed { message: String },

    /// The payload's `jobListings` field is not an array.
    #[error("Expected an array of job listings")]
    InvalidResponseShape,
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        ExtractError::ExtractionFailed {
            message: err.to_string(),
        }
    }
}
