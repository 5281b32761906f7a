//! Outcomes that stop or dent a cleanup run.

use thiserror::Error;
use vkclean_core::GroupId;

/// Everything that can go wrong during a run.
///
/// None of these crash the run: each is logged where it happens and turned
/// into a [`RunEnd`](crate::RunEnd) or a failed tally entry.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// Neither an access token nor a login/password pair is configured.
    #[error("no authentication credentials provided")]
    MissingCredentials,

    /// The session could not be opened or verified.
    #[error("authentication failed: {0}")]
    Authentication(#[source] vkclean_core::Error),

    /// The membership list could not be fetched.
    #[error("failed to fetch groups: {0}")]
    Fetch(#[source] vkclean_core::Error),

    /// One leave call failed.
    #[error("failed to leave group {name} (ID: {id}): {source}")]
    Leave {
        id: GroupId,
        name: String,
        #[source]
        source: vkclean_core::Error,
    },

    /// The operator declined the confirmation prompt.
    #[error("operation cancelled by user")]
    Cancelled,
}
