// crates/repo-info/src/error.rs
use thiserror::Error;

/// Errors raised while talking to the REST API or printing its answer.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to '{url}' failed: {details}")]
    Http { url: String, details: String },

    #[error("GitHub API returned {status} for '{url}': {message}")]
    Status { url: String, status: u16, message: String },

    #[error("Response from '{url}' is not valid JSON: {details}")]
    Decode { url: String, details: String },

    #[error("Unexpected response from '{url}': expected {expected}")]
    UnexpectedShape { url: String, expected: &'static str },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
