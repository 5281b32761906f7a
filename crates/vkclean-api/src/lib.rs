//! vkclean-api - VK REST API backed implementation of the vkclean traits.

mod client;
mod config;
mod endpoints;
mod service;
mod session;

pub use config::{
    DEFAULT_API_URL, DEFAULT_API_VERSION, DEFAULT_APP_ID, DEFAULT_OAUTH_URL, VkConfig,
};
pub use service::VkApi;
pub use session::VkSession;
