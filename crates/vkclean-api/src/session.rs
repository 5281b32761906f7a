//! VK API backed session implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use vkclean_core::error::ProtocolError;
use vkclean_core::traits::Session as SessionTrait;
use vkclean_core::types::{GroupId, GroupList, UserId};
use vkclean_core::{AccessToken, Result};

use crate::endpoints::*;
use crate::service::VkApi;

/// Session for the VK API.
#[derive(Clone)]
pub struct VkSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    api: VkApi,
    token: AccessToken,
}

impl VkSession {
    pub(crate) fn new(api: VkApi, token: AccessToken) -> Self {
        Self {
            inner: Arc::new(SessionInner { api, token }),
        }
    }

    async fn call<Q, R>(&self, method: &str, params: &Q) -> Result<R>
    where
        Q: serde::Serialize + std::fmt::Debug + Sync,
        R: serde::de::DeserializeOwned,
    {
        self.inner
            .api
            .client()
            .call(method, params, self.inner.token.as_str())
            .await
    }
}

#[async_trait]
impl SessionTrait for VkSession {
    fn access_token(&self) -> AccessToken {
        self.inner.token.clone()
    }

    #[instrument(skip(self))]
    async fn current_user(&self) -> Result<UserId> {
        debug!("Looking up current user");
        let users: Vec<UserEntry> = self.call(USERS_GET, &UsersGetQuery {}).await?;

        users
            .first()
            .map(|user| UserId::new(user.id))
            .ok_or_else(|| {
                ProtocolError::new(200, Some(format!("{} returned no users", USERS_GET))).into()
            })
    }

    #[instrument(skip(self))]
    async fn list_groups(&self) -> Result<GroupList> {
        debug!("Listing groups");
        let query = GroupsGetQuery {
            extended: 1,
            fields: GROUP_FIELDS,
        };
        let response: GroupsGetResponse = self.call(GROUPS_GET, &query).await?;

        Ok(GroupList {
            count: response.count,
            items: response.items.into_iter().map(Into::into).collect(),
        })
    }

    #[instrument(skip(self))]
    async fn leave_group(&self, group: GroupId) -> Result<()> {
        debug!("Leaving group");
        let query = GroupsLeaveQuery {
            group_id: group.get(),
        };
        let response: i64 = self.call(GROUPS_LEAVE, &query).await?;

        if response == 1 {
            Ok(())
        } else {
            Err(ProtocolError::new(
                200,
                Some(format!("{} returned {}", GROUPS_LEAVE, response)),
            )
            .into())
        }
    }
}

impl std::fmt::Debug for VkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VkSession")
            .field("api", &self.inner.api.config().api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
