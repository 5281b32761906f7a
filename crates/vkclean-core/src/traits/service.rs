//! Service trait.

use async_trait::async_trait;

use crate::{Credentials, Result};

use super::Session;

/// A remote service the cleaner can authenticate against.
#[async_trait]
pub trait Service: Send + Sync {
    /// Session type for this service.
    type Session: Session;

    /// Open a session with the given credentials.
    ///
    /// Token credentials are used as-is. Login/password credentials go
    /// through the service's authentication handshake first.
    async fn open(&self, credentials: &Credentials) -> Result<Self::Session>;
}
