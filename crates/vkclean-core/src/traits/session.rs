//! Authenticated session trait.

use async_trait::async_trait;

use crate::types::{GroupId, GroupList, UserId};
use crate::{AccessToken, Result};

/// An authenticated session for membership operations.
#[async_trait]
pub trait Session: Send + Sync {
    /// Returns the access token for this session.
    fn access_token(&self) -> AccessToken;

    /// Look up the identity the session belongs to.
    async fn current_user(&self) -> Result<UserId>;

    /// List the groups the user is a member of, with extended fields.
    async fn list_groups(&self) -> Result<GroupList>;

    /// Leave a group.
    async fn leave_group(&self, group: GroupId) -> Result<()>;
}
