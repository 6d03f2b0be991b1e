use reqwest::StatusCode;
use thiserror::Error;

/// Startup failures. Any of these aborts the process before polling begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing env variable {0}")]
    MissingEnv(String),
}

/// Failures that end a single poll iteration. The loop logs them and moves on.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("failed to fetch results: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("results endpoint returned {0}")]
    FetchStatus(StatusCode),
    #[error("failed to decode results: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid feed timestamp {0:?}: fewer than 10 digits")]
    TimestampTooShort(String),
    #[error("invalid feed timestamp {0:?}: prefix is not numeric")]
    TimestampNotNumeric(String),
    #[error("invalid response: {0} parties, need at least 2")]
    TooFewParties(usize),
    #[error("failed to post tweet: {0}")]
    Publish(#[from] PublishError),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("posting API rejected the update ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}
