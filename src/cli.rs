//! Defines the command-line interface for the application.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com";

/// Long flag names that may also be spelled with a single leading dash.
const LONG_FLAGS: &[&str] = &[
    "consumer-key",
    "consumer-secret",
    "access-token",
    "access-secret",
    "file",
    "api-url",
    "dry-run",
];

#[derive(Parser, Debug)]
#[command(
    name = "tweet-file",
    version,
    about = "Post the contents of a text file as a Twitter status update."
)]
pub struct Cli {
    /// Twitter Consumer Key.
    #[arg(
        long,
        value_name = "KEY",
        env = "TWITTER_CONSUMER_KEY",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub consumer_key: String,

    /// Twitter Consumer Secret.
    #[arg(
        long,
        value_name = "SECRET",
        env = "TWITTER_CONSUMER_SECRET",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub consumer_secret: String,

    /// Twitter Access Token.
    #[arg(
        long,
        value_name = "TOKEN",
        env = "TWITTER_ACCESS_TOKEN",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub access_token: String,

    /// Twitter Access Secret.
    #[arg(
        long,
        value_name = "SECRET",
        env = "TWITTER_ACCESS_SECRET",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub access_secret: String,

    /// File holding the tweet message content.
    #[arg(long, value_name = "FILE_PATH", env = "TWITTER_FILE")]
    pub file: Option<PathBuf>,

    /// Base URL of the Twitter API.
    #[arg(long, value_name = "URL", env = "TWITTER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Validate the inputs and print the message without posting it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Rewrites single-dash long flags (`-consumer-key`, `-file=x`) to the
/// double-dash form clap expects. Values that follow a known flag are passed
/// through untouched. Like Go's `flag` package, parsing stops at a bare `--`
/// or at the first positional argument, and everything from there on is
/// dropped.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    if let Some(program) = args.next() {
        normalized.push(program);
    }

    let mut expect_value = false;
    let mut stopped = false;

    for arg in args.by_ref() {
        if expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            stopped = true;
            break;
        };

        if text == "--" || text == "-" || !text.starts_with('-') {
            stopped = true;
            break;
        }

        let rest = text.strip_prefix("--").unwrap_or(&text[1..]);
        let (name, inline_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };

        if LONG_FLAGS.contains(&name) {
            expect_value = !inline_value && name != "dry-run";
            normalized.push(OsString::from(format!("--{rest}")));
        } else {
            normalized.push(arg);
        }
    }

    let ignored = args.count() + usize::from(stopped);
    if ignored > 0 {
        log::debug!("Ignoring {ignored} argument(s) after the flags");
    }

    normalized
}
