//! VK API backed service implementation.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use vkclean_core::traits::Service;
use vkclean_core::{AccessToken, Credentials, Result};

use crate::client::ApiClient;
use crate::config::VkConfig;
use crate::endpoints::PasswordGrantQuery;
use crate::session::VkSession;

/// A network-backed service talking to the VK REST API.
#[derive(Debug, Clone)]
pub struct VkApi {
    config: VkConfig,
    client: ApiClient,
}

impl VkApi {
    /// Create a new service for the given settings.
    pub fn new(config: VkConfig) -> Result<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Returns the settings this instance was built with.
    pub fn config(&self) -> &VkConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Run the password handshake and return the issued token.
    #[instrument(skip(self, password))]
    async fn exchange_password(&self, login: &str, password: &str) -> Result<AccessToken> {
        info!("Requesting access token for login");

        let query = PasswordGrantQuery {
            grant_type: "password",
            client_id: &self.config.app_id,
            client_secret: self.config.app_secret.as_deref(),
            username: login,
            password,
            scope: "groups",
            two_factor_supported: 1,
            v: &self.config.version,
        };

        let token = self.client.password_grant(&query).await?;
        Ok(AccessToken::new(token))
    }
}

#[async_trait]
impl Service for VkApi {
    type Session = VkSession;

    async fn open(&self, credentials: &Credentials) -> Result<Self::Session> {
        debug!(method = credentials.method(), "Opening session");

        let token = match credentials {
            Credentials::AccessToken(token) => token.clone(),
            Credentials::Password { login, password } => {
                self.exchange_password(login, password).await?
            }
        };

        Ok(VkSession::new(self.clone(), token))
    }
}
