//! VK HTTP client implementation.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use vkclean_core::error::{ApiError, AuthError, Error, ProtocolError, TransportError};
use vkclean_core::{ApiUrl, Result};

use crate::config::VkConfig;
use crate::endpoints::{ApiEnvelope, OAUTH_TOKEN, PasswordGrantQuery, TokenResponse};

/// HTTP client for VK API method calls and the OAuth token endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
    oauth: ApiUrl,
    version: String,
}

impl ApiClient {
    /// Create a new client for the configured endpoints.
    pub fn new(config: &VkConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vkclean/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            client,
            api: config.api_url.clone(),
            oauth: config.oauth_url.clone(),
            version: config.version.clone(),
        })
    }

    /// Call an API method with the given access token.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn call<Q, R>(&self, method: &str, params: &Q, token: &str) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.method_url(method);
        debug!(method, "API call");
        trace!(?params, "call parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("access_token", token), ("v", self.version.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "API response");

        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(ProtocolError::new(status.as_u16(), excerpt(&body)).into());
        }

        let envelope: ApiEnvelope<R> = serde_json::from_str(&body).map_err(decode_error)?;

        match (envelope.response, envelope.error) {
            (_, Some(error)) if error.error_code == ApiError::AUTHORIZATION_FAILED => {
                Err(AuthError::InvalidToken {
                    message: error.error_msg,
                }
                .into())
            }
            (_, Some(error)) => Err(ApiError::new(error.error_code, error.error_msg).into()),
            (Some(response), None) => Ok(response),
            (None, None) => Err(ProtocolError::new(
                status.as_u16(),
                Some(format!("{} returned neither response nor error", method)),
            )
            .into()),
        }
    }

    /// Exchange a login and password for an access token (direct auth).
    #[instrument(skip(self, query), fields(oauth = %self.oauth, username = query.username))]
    pub async fn password_grant(&self, query: &PasswordGrantQuery<'_>) -> Result<String> {
        let url = self.oauth.join(OAUTH_TOKEN);
        debug!("OAuth password grant");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        // Failures come back as 4xx with a JSON body, so parse either way
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|_| ProtocolError::new(status.as_u16(), excerpt(&body)))?;

        if let Some(access_token) = token.access_token {
            debug!(user_id = ?token.user_id, "OAuth grant succeeded");
            return Ok(access_token);
        }

        let error = token.error.unwrap_or_else(|| "unknown_error".to_string());
        let description = token.error_description.unwrap_or_default();

        Err(match error.as_str() {
            "need_validation" => AuthError::ValidationRequired,
            "need_captcha" => AuthError::CaptchaRequired,
            _ => AuthError::Rejected { error, description },
        }
        .into())
    }
}

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    err.into()
}

fn decode_error(err: serde_json::Error) -> Error {
    TransportError::Decode {
        message: err.to_string(),
    }
    .into()
}

/// First part of a response body, for error messages.
fn excerpt(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        None
    } else {
        Some(body.chars().take(200).collect())
    }
}
