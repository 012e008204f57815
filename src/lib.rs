//! `tweet-file` posts the contents of a text file as a Twitter status update.
//!
//! A run resolves its [`Config`](config::Config) from flags and `TWITTER_*`
//! environment variables, validates the credentials and the message, then
//! publishes the message through a [`StatusPoster`](client::StatusPoster).
//! The pipeline never exits the process itself; errors flow back to the
//! binary as [`TweetError`](error::TweetError).
//!
//! # Example
//!
//! ```rust
//! use tweet_file::client::{PostedStatus, StatusPoster};
//! use tweet_file::error::TwitterResult;
//! use tweet_file::message::Message;
//!
//! struct Echo;
//!
//! impl StatusPoster for Echo {
//!     fn update_status(&self, text: &str) -> TwitterResult<PostedStatus> {
//!         Ok(PostedStatus { id: "1".into(), text: text.into() })
//!     }
//! }
//!
//! # fn demo() -> Result<(), tweet_file::error::TweetError> {
//! let message = Message::new("Release 1.2 is out")?;
//! let posted = tweet_file::publish(&Echo, &message)?;
//! assert_eq!(posted.text, "Release 1.2 is out");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod oauth;

use crate::client::{PostedStatus, StatusPoster};
use crate::config::Config;
use crate::error::TweetError;
use crate::message::Message;

/// Validates the credentials, then loads and validates the message.
pub fn prepare(config: &Config) -> Result<Message, TweetError> {
    config.credentials.validate()?;
    Message::load(config.file.as_deref())
}

/// Submits a single "update status" call carrying `message`.
pub fn publish<P>(poster: &P, message: &Message) -> Result<PostedStatus, TweetError>
where
    P: StatusPoster + ?Sized,
{
    Ok(poster.update_status(message.as_str())?)
}
