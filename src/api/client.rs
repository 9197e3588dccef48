//! High-level client facade.
//!
//! Wires the session establisher and collection synchronizer over one
//! shared transport, and provides the aggregate login-then-load flow
//! the UI layer drives.

use tracing::debug;

use super::SyncError;
use super::collection::CollectionSync;
use super::loader::{AddonLoader, load_collection};
use super::session::SessionEstablisher;
use super::transport::{DEFAULT_API_BASE, Transport};
use super::types::{AddonCollection, AddonDescriptor, Credentials, LoginOutcome, Session};

/// Client for one Stremio API deployment.
///
/// Holds no session state itself: sessions are explicit values passed
/// to and returned from each operation, so one client can serve any
/// number of independent sessions.
#[derive(Debug, Clone)]
pub struct StremioClient {
    establisher: SessionEstablisher,
    collection: CollectionSync,
}

impl Default for StremioClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StremioClient {
    /// Creates a client against the official API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates a client against a custom deployment (or a test mock).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let transport = Transport::with_base_url(base_url);
        Self {
            establisher: SessionEstablisher::new(transport.clone()),
            collection: CollectionSync::new(transport),
        }
    }

    /// Validates a raw auth key; see [`SessionEstablisher::establish_by_key`].
    pub async fn establish_by_key(
        &self,
        raw_key: &str,
    ) -> Result<(Session, AddonCollection), SyncError> {
        self.establisher.establish_by_key(raw_key).await
    }

    /// Password/provider login; see [`SessionEstablisher::establish_by_login`].
    pub async fn establish_by_login(
        &self,
        email: &str,
        password: &str,
        use_provider: bool,
    ) -> Result<LoginOutcome, SyncError> {
        self.establisher.establish_by_login(email, password, use_provider).await
    }

    /// Fetches the addon collection for an established session.
    pub async fn fetch_collection(&self, session: &Session) -> Result<AddonCollection, SyncError> {
        self.collection.fetch(session).await
    }

    /// Submits `addons` as the new authoritative collection.
    pub async fn submit_collection(
        &self,
        session: &Session,
        addons: &[AddonDescriptor],
    ) -> Result<(), SyncError> {
        self.collection.submit(session, addons).await
    }

    /// Fetches the collection, merges `addon` into it, and submits the
    /// full result.
    ///
    /// The merge appends; when the transport URL is already present the
    /// fetched list is submitted unchanged. Returns the collection as
    /// submitted.
    pub async fn add_addon(
        &self,
        session: &Session,
        addon: AddonDescriptor,
    ) -> Result<AddonCollection, SyncError> {
        let mut addons = self.collection.fetch(session).await?;

        if addons.iter().any(|a| a.transport_url == addon.transport_url) {
            debug!("[SYNC] Addon already in collection: {}", addon.transport_url);
        } else {
            addons.push(addon);
        }

        self.collection.submit(session, &addons).await?;
        Ok(addons)
    }

    /// Establishes a session, fetches the collection, and loads every
    /// addon sequentially in collection order.
    ///
    /// On the raw-key path the probe fetch doubles as the collection
    /// fetch, so exactly one collection request is issued.
    pub async fn login_and_load_all<L: AddonLoader>(
        &self,
        credentials: Credentials,
        loader: &mut L,
    ) -> Result<Session, SyncError> {
        let (session, addons) = match credentials {
            Credentials::RawKey(key) => self.establisher.establish_by_key(&key).await?,
            Credentials::Login {
                email,
                password,
                use_provider,
            } => {
                let outcome = self
                    .establisher
                    .establish_by_login(&email, &password, use_provider)
                    .await?;
                let addons = self.collection.fetch(&outcome.session).await?;
                (outcome.session, addons)
            }
        };

        load_collection(&addons, loader).await?;
        Ok(session)
    }
}
