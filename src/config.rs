//! Resolved run configuration.

use std::fmt;
use std::path::PathBuf;

use crate::cli::{Cli, DEFAULT_API_URL};
use crate::error::TweetError;

/// OAuth 1.0a user-context credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl Credentials {
    /// Checks that all four values are present.
    pub fn validate(&self) -> Result<(), TweetError> {
        let missing: Vec<&'static str> = [
            ("consumer key", &self.consumer_key),
            ("consumer secret", &self.consumer_secret),
            ("access token", &self.access_token),
            ("access secret", &self.access_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TweetError::MissingCredentials(missing))
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("access_token", &self.access_token)
            .field("access_secret", &redact(&self.access_secret))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// Everything a run needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub file: Option<PathBuf>,
    pub api_url: String,
    pub dry_run: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            credentials: Credentials {
                consumer_key: cli.consumer_key,
                consumer_secret: cli.consumer_secret,
                access_token: cli.access_token,
                access_secret: cli.access_secret,
            },
            file: cli.file.filter(|path| !path.as_os_str().is_empty()),
            api_url: if cli.api_url.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                cli.api_url
            },
            dry_run: cli.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Credentials {
        Credentials {
            consumer_key: "ck".into(),
            consumer_secret: "cs".into(),
            access_token: "at".into(),
            access_secret: "as".into(),
        }
    }

    #[test]
    fn complete_credentials_validate() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn each_missing_credential_is_reported() {
        let cases: [(fn(&mut Credentials), &str); 4] = [
            (|c| c.consumer_key.clear(), "consumer key"),
            (|c| c.consumer_secret.clear(), "consumer secret"),
            (|c| c.access_token.clear(), "access token"),
            (|c| c.access_secret.clear(), "access secret"),
        ];

        for (clear, name) in cases {
            let mut credentials = complete();
            clear(&mut credentials);

            match credentials.validate() {
                Err(TweetError::MissingCredentials(missing)) => assert_eq!(missing, [name]),
                other => panic!("expected missing {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_credentials_list_everything() {
        let err = Credentials::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Consumer key/secret and Access token/secret required \
             (missing: consumer key, consumer secret, access token, access secret)"
        );
    }

    #[test]
    fn empty_api_url_falls_back_to_default() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["tweet-file", "--api-url", "", "--file", ""]).unwrap();
        let config = Config::from(cli);

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.file, None);
    }

    #[test]
    fn debug_hides_secrets() {
        let rendered = format!("{:?}", complete());
        assert!(rendered.contains("\"ck\""));
        assert!(!rendered.contains("\"cs\""));
        assert!(!rendered.contains("\"as\""));
        assert!(rendered.contains("<redacted>"));
    }
}
