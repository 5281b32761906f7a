//! Opening and verifying the session.

use tracing::{error, info, instrument};

use vkclean_core::{Credentials, Service, Session, UserId};

use crate::error::CleanupError;

/// A verified session together with the identity behind it.
#[derive(Debug)]
pub struct Authenticated<S> {
    pub session: S,
    pub user_id: UserId,
}

/// Open a session and confirm it by looking up the current user.
///
/// Without credentials this fails immediately and never touches the
/// service. Every other failure is logged and returned as
/// [`CleanupError::Authentication`].
#[instrument(skip_all)]
pub async fn authenticate<V: Service>(
    service: &V,
    credentials: Option<&Credentials>,
) -> Result<Authenticated<V::Session>, CleanupError> {
    let Some(credentials) = credentials else {
        error!("No authentication method provided: need an access token or a login/password pair");
        return Err(CleanupError::MissingCredentials);
    };

    info!("Authenticating with {}...", credentials.method());

    let verified = async {
        let session = service.open(credentials).await?;
        let user_id = session.current_user().await?;
        Ok::<_, vkclean_core::Error>((session, user_id))
    }
    .await;

    match verified {
        Ok((session, user_id)) => {
            info!("Successfully authenticated as user ID: {}", user_id);
            Ok(Authenticated { session, user_id })
        }
        Err(e) => {
            error!("Authentication failed: {}", e);
            Err(CleanupError::Authentication(e))
        }
    }
}
