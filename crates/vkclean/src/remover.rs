//! Leaving a single group.

use tracing::{error, info};

use vkclean_core::{GroupId, Session};

use crate::error::CleanupError;

/// What happened to one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leave {
    /// Dry run: nothing was sent.
    Simulated,
    /// The service confirmed the leave.
    Left,
}

/// Leaves groups through a session, or pretends to.
#[derive(Debug)]
pub struct Remover<'a, S> {
    session: &'a S,
    dry_run: bool,
}

impl<'a, S: Session> Remover<'a, S> {
    pub fn new(session: &'a S, dry_run: bool) -> Self {
        Self { session, dry_run }
    }

    /// Leave one group. In dry run no call is made.
    pub async fn try_leave(&self, id: GroupId, name: &str) -> Result<Leave, CleanupError> {
        if self.dry_run {
            info!("[DRY RUN] Would leave group: {} (ID: {})", name, id);
            return Ok(Leave::Simulated);
        }

        self.session
            .leave_group(id)
            .await
            .map_err(|source| CleanupError::Leave {
                id,
                name: name.to_string(),
                source,
            })?;

        info!("Successfully left group: {} (ID: {})", name, id);
        Ok(Leave::Left)
    }

    /// Like [`try_leave`](Self::try_leave), logging the failure and
    /// reporting success as a boolean.
    pub async fn leave(&self, id: GroupId, name: &str) -> bool {
        match self.try_leave(id, name).await {
            Ok(_) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }
}
