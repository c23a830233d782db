use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    /// Rejected before any request was built. The message is shown to the user verbatim.
    #[error("{0}")]
    InvalidInput(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Transport Error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Malformed Response: {0}")]
    MalformedResponse(String),
}

pub type SurveyResult<T> = Result<T, SurveyError>;
