//! Error types for the catalog client.

use thiserror::Error;

/// Failure of a single call against the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("{0}")]
    Decode(String),

    /// The backend answered with a non-ok status and a JSON error body.
    #[error("request rejected with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message taken from the `detail` field, if it carried one.
        detail: Option<String>,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Errors raised while setting up the HTTP client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base could not be turned into a URL.
    #[error("invalid api base url {base}: {reason}")]
    InvalidBaseUrl {
        /// The offending base.
        base: String,
        /// Parser message.
        reason: String,
    },

    /// A relative base was configured but there is no page to resolve it against.
    #[error("no browser window available to resolve {0}")]
    NoWindow(String),

    /// The reqwest client could not be built.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
