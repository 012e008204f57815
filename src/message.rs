//! Loading and validating the status text.

use std::fs;
use std::path::Path;

use crate::error::TweetError;

/// Upper bound on the status text, counted in UTF-8 bytes.
pub const MAX_MESSAGE_LEN: usize = 280;

/// A status text that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// Validates `text` against the emptiness and length rules.
    pub fn new(text: impl Into<String>) -> Result<Self, TweetError> {
        let text = text.into();
        if text.is_empty() {
            return Err(TweetError::EmptyMessage);
        }
        if text.len() > MAX_MESSAGE_LEN {
            return Err(TweetError::MessageTooLong(text.len()));
        }
        Ok(Self(text))
    }

    /// Reads the message file and validates its content.
    ///
    /// A missing path or an unreadable file yields an empty body, which is
    /// then rejected as [`TweetError::EmptyMessage`]. Invalid UTF-8 sequences
    /// are replaced with U+FFFD before the length check.
    pub fn load(path: Option<&Path>) -> Result<Self, TweetError> {
        Self::new(read_body(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn read_body(path: Option<&Path>) -> String {
    let Some(path) = path else {
        log::debug!("No message file given");
        return String::new();
    };

    match fs::read(path) {
        Ok(bytes) => {
            log::debug!("Read {} bytes from {}", bytes.len(), path.display());
            match String::from_utf8(bytes) {
                Ok(body) => body,
                Err(err) => {
                    log::warn!(
                        "{} is not valid UTF-8, replacing invalid bytes",
                        path.display()
                    );
                    String::from_utf8_lossy(err.as_bytes()).into_owned()
                }
            }
        }
        Err(err) => {
            log::debug!("Could not read message file {}: {err}", path.display());
            String::new()
        }
    }
}
