//! vkclean-core - Core types and traits for the VK membership cleaner.
//!
//! All authenticated operations flow through a [`Session`] obtained from a
//! [`Service`]. Backends (such as the HTTP one in `vkclean-api`) implement
//! both traits; the workflow in `vkclean` only depends on the traits.

pub mod credentials;
pub mod error;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use tokens::AccessToken;
pub use traits::{Service, Session};
pub use types::{ApiUrl, GroupId, GroupKind, GroupList, GroupRecord, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
