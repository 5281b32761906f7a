//! Connection settings for the VK API.

use std::time::Duration;

use vkclean_core::ApiUrl;

/// Default REST API base.
pub const DEFAULT_API_URL: &str = "https://api.vk.com";

/// Default OAuth server base.
pub const DEFAULT_OAUTH_URL: &str = "https://oauth.vk.com";

/// API version sent as the `v` parameter.
pub const DEFAULT_API_VERSION: &str = "5.199";

/// Client id used for the password grant when none is configured.
pub const DEFAULT_APP_ID: &str = "6222115";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to talk to the VK API.
#[derive(Clone)]
pub struct VkConfig {
    pub api_url: ApiUrl,
    pub oauth_url: ApiUrl,
    pub version: String,
    pub app_id: String,
    pub app_secret: Option<String>,
    pub timeout: Duration,
}

impl VkConfig {
    /// Settings for the given endpoints with default version, app and timeout.
    pub fn new(api_url: ApiUrl, oauth_url: ApiUrl) -> Self {
        Self {
            api_url,
            oauth_url,
            version: DEFAULT_API_VERSION.to_string(),
            app_id: DEFAULT_APP_ID.to_string(),
            app_secret: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Settings for the public VK endpoints.
    pub fn official() -> vkclean_core::Result<Self> {
        Ok(Self::new(
            ApiUrl::new(DEFAULT_API_URL)?,
            ApiUrl::new(DEFAULT_OAUTH_URL)?,
        ))
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_app(mut self, app_id: impl Into<String>, app_secret: Option<String>) -> Self {
        self.app_id = app_id.into();
        self.app_secret = app_secret;
        self
    }
}

// The app secret must never reach the logs
impl std::fmt::Debug for VkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VkConfig")
            .field("api_url", &self.api_url)
            .field("oauth_url", &self.oauth_url)
            .field("version", &self.version)
            .field("app_id", &self.app_id)
            .field("app_secret", &self.app_secret.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
