use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("API key missing: set {var} in the environment or the .env file")]
    MissingApiKey { var: &'static str },

    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer from the Data API.
    #[error("{message}")]
    Api {
        endpoint: &'static str,
        status: StatusCode,
        message: String,
    },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("no content found ({endpoint})")]
    NoContent { endpoint: &'static str },

    #[error("no result found")]
    NoResult,

    #[error("result not channel type (got {kind})")]
    NotChannel { kind: String },

    #[error("response is missing {field}")]
    MissingField { field: &'static str },
}
