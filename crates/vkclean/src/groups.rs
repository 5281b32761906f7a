//! Fetching the membership list.

use tracing::{error, info, warn};

use vkclean_core::{GroupRecord, Session};

use crate::error::CleanupError;

/// Fetch every group the session's user belongs to, in server order.
///
/// Issues exactly one enumeration call. An empty `Ok` means the user is in
/// no groups; a failed call is a [`CleanupError::Fetch`].
pub async fn list_groups<S: Session>(session: &S) -> Result<Vec<GroupRecord>, CleanupError> {
    info!("Fetching user groups...");

    let list = session.list_groups().await.map_err(|e| {
        error!("Failed to fetch groups: {}", e);
        CleanupError::Fetch(e)
    })?;

    info!("Found {} groups", list.count);

    if list.count > list.items.len() as u64 {
        warn!(
            reported = list.count,
            returned = list.items.len(),
            "Server returned fewer groups than it reported; only the returned ones are processed"
        );
    }

    Ok(list.items)
}
