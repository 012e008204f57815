//! Twitter REST API client.

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Credentials;
use crate::error::{TwitterError, TwitterResult};
use crate::oauth::OAuthSigner;

const UPDATE_STATUS_ENDPOINT: &str = "/1.1/statuses/update.json";

/// The status as echoed back by the API after creation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PostedStatus {
    #[serde(rename = "id_str")]
    pub id: String,
    pub text: String,
}

/// Anything that can publish a status update.
pub trait StatusPoster {
    fn update_status(&self, text: &str) -> TwitterResult<PostedStatus>;
}

/// Blocking client for the user-context Twitter API.
#[derive(Debug)]
pub struct TwitterClient {
    client: Client,
    base_url: String,
    oauth_signer: OAuthSigner,
}

impl TwitterClient {
    pub fn new(credentials: &Credentials, api_url: &str) -> TwitterResult<Self> {
        let client = Client::builder()
            .user_agent(format!("tweet-file/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: api_url.trim_end_matches('/').to_string(),
            oauth_signer: OAuthSigner::new(credentials),
        })
    }

    /// Sends a signed, form-encoded POST request.
    fn post_form<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: &[(&str, &str)],
    ) -> TwitterResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("POST {url}");

        let auth_header = self.oauth_signer.sign("POST", &url, form)?;
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, auth_header)
            .form(form)
            .send()?;

        handle_response(response)
    }
}

impl StatusPoster for TwitterClient {
    fn update_status(&self, text: &str) -> TwitterResult<PostedStatus> {
        self.post_form(UPDATE_STATUS_ENDPOINT, &[("status", text)])
    }
}

fn handle_response<T: DeserializeOwned>(response: Response) -> TwitterResult<T> {
    let status = response.status();
    let bytes = response.bytes()?;

    if status.is_success() {
        return serde_json::from_slice(&bytes).map_err(TwitterError::from);
    }

    log::debug!("Twitter answered {status}");
    Err(TwitterError::Api {
        status: status.as_u16(),
        message: error_message(&bytes),
    })
}

/// Error bodies come in the v1.1 shape (`errors` array) or the v2 problem
/// shape (`detail`/`title`); anything else is reported verbatim.
fn error_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        errors: Vec<ApiError>,
        #[serde(default)]
        detail: Option<String>,
        #[serde(default)]
        title: Option<String>,
    }

    #[derive(Deserialize)]
    struct ApiError {
        #[serde(default)]
        code: Option<i64>,
        message: String,
    }

    let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
    let message = parsed.and_then(|parsed| {
        if parsed.errors.is_empty() {
            parsed.detail.or(parsed.title)
        } else {
            Some(
                parsed
                    .errors
                    .iter()
                    .map(|e| match e.code {
                        Some(code) => format!("{code} {}", e.message),
                        None => e.message.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        }
    });

    message.unwrap_or_else(|| {
        let raw = String::from_utf8_lossy(body).trim().to_string();
        if raw.is_empty() {
            "Unknown error".to_string()
        } else {
            raw
        }
    })
}
