//! Session establishment.
//!
//! Turns credentials into a validated [`Session`]. A raw auth key is
//! validated by probing: the API has no dedicated verification
//! endpoint, so validity is established by performing a real collection
//! fetch with the candidate key.

use tracing::{info, warn};

use super::SyncError;
use super::collection::CollectionSync;
use super::transport::{Endpoint, RemoteResponse, Transport};
use super::types::{AddonCollection, LoginOutcome, LoginRequest, LoginResult, Session};

/// Produces validated sessions from either credential form.
#[derive(Debug, Clone)]
pub struct SessionEstablisher {
    transport: Transport,
    collection: CollectionSync,
}

impl SessionEstablisher {
    /// Creates an establisher over the given transport.
    #[must_use]
    pub fn new(transport: Transport) -> Self {
        let collection = CollectionSync::new(transport.clone());
        Self { transport, collection }
    }

    /// Validates a raw auth key by performing a real collection fetch.
    ///
    /// A blank or whitespace-only key is rejected locally with zero
    /// network calls. Otherwise exactly one probe fetch is issued: a
    /// domain error means the key grants no access
    /// (`InvalidCredential`); a transport failure stays a transport
    /// failure. On success the probe's collection is returned with the
    /// session so callers need not fetch again.
    pub async fn establish_by_key(
        &self,
        raw_key: &str,
    ) -> Result<(Session, AddonCollection), SyncError> {
        let raw_key = raw_key.trim();
        if raw_key.is_empty() {
            warn!("[SYNC] Rejecting blank auth key");
            return Err(SyncError::InvalidCredential);
        }

        let candidate = Session::new(raw_key.to_string());
        match self.collection.fetch(&candidate).await {
            Ok(addons) => {
                info!("[SYNC] Auth key validated, {} addons in collection", addons.len());
                Ok((candidate, addons))
            }
            Err(SyncError::RemoteError(message)) => {
                warn!("[SYNC] Auth key rejected: {}", message);
                Err(SyncError::InvalidCredential)
            }
            Err(other) => Err(other),
        }
    }

    /// Logs in with email/password (or the provider flow) and returns
    /// the new session plus the full login payload.
    ///
    /// Email and password are not validated locally; blank values are
    /// sent as-is and rejected by the service.
    pub async fn establish_by_login(
        &self,
        email: &str,
        password: &str,
        use_provider: bool,
    ) -> Result<LoginOutcome, SyncError> {
        let request = LoginRequest::new(email, password, use_provider);
        let response: RemoteResponse<LoginResult> =
            self.transport.post(Endpoint::Login, &request).await?;

        match response {
            RemoteResponse::Success(user) => {
                info!("[SYNC] Login succeeded for {}", email);
                let session = Session::new(user.auth_key.clone());
                Ok(LoginOutcome { session, user })
            }
            RemoteResponse::Failure(error) => {
                warn!("[SYNC] Login rejected: {}", error.message);
                Err(SyncError::LoginRejected(error.message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unroutable base: a network call here would fail, not hang, so a
    // passing test proves the blank key never reached the transport.
    fn establisher() -> SessionEstablisher {
        SessionEstablisher::new(Transport::with_base_url("http://127.0.0.1:9"))
    }

    #[tokio::test]
    async fn test_empty_key_rejected_locally() {
        let result = establisher().establish_by_key("").await;
        assert!(matches!(result, Err(SyncError::InvalidCredential)));
    }

    #[tokio::test]
    async fn test_whitespace_key_rejected_locally() {
        let result = establisher().establish_by_key("   \t").await;
        assert!(matches!(result, Err(SyncError::InvalidCredential)));
    }
}
