//! Defines custom error types for the application.

use thiserror::Error;

use crate::message::MAX_MESSAGE_LEN;

/// Error type returned when a status cannot be validated or posted.
#[derive(Error, Debug)]
pub enum TweetError {
    #[error("Consumer key/secret and Access token/secret required (missing: {})", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Tweet content required")]
    EmptyMessage,

    #[error("Tweet must be less than {max} char (got {0} bytes)", max = MAX_MESSAGE_LEN)]
    MessageTooLong(usize),

    #[error(transparent)]
    Remote(#[from] TwitterError),
}

/// Failures of the remote "update status" call.
#[derive(Error, Debug)]
pub enum TwitterError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// OAuth signature generation failed
    #[error("OAuth error: {0}")]
    OAuth(String),

    /// Twitter API returned an error
    #[error("Twitter API error {status}: {message}")]
    Api { status: u16, message: String },
}

pub type TwitterResult<T> = Result<T, TwitterError>;
