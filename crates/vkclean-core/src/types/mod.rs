//! Core domain types.

mod api_url;
mod group;
mod ids;

pub use api_url::ApiUrl;
pub use group::{GroupKind, GroupList, GroupRecord};
pub use ids::{GroupId, UserId};
