//! Addon collection synchronization.
//!
//! Fetches the remote collection as an ordered snapshot and submits a
//! full replacement collection. There is no local cache: every fetch is
//! a live round trip, and the session is never invalidated here even
//! when the service reports an error.

use tracing::{debug, info, warn};

use super::SyncError;
use super::transport::{Endpoint, RemoteResponse, Transport};
use super::types::{
    AddonCollection, AddonDescriptor, CollectionGetRequest, CollectionGetResult,
    CollectionSetRequest, Session,
};

/// Collection fetch/submit operations over one transport.
#[derive(Debug, Clone)]
pub struct CollectionSync {
    transport: Transport,
}

impl CollectionSync {
    /// Creates a synchronizer over the given transport.
    #[must_use]
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetches the user's addon collection, in service order.
    ///
    /// The request always carries `update: true` so the service
    /// refreshes the collection server-side before returning it.
    pub async fn fetch(&self, session: &Session) -> Result<AddonCollection, SyncError> {
        let request = CollectionGetRequest::new(session.auth_key());
        let response: RemoteResponse<CollectionGetResult> =
            self.transport.post(Endpoint::AddonCollectionGet, &request).await?;

        match response {
            RemoteResponse::Success(result) => {
                debug!("[SYNC] Fetched {} addons", result.addons.len());
                Ok(result.addons)
            }
            RemoteResponse::Failure(error) => {
                warn!("[SYNC] Collection fetch failed: {}", error.message);
                Err(SyncError::RemoteError(error.message))
            }
        }
    }

    /// Submits `addons` as the new authoritative collection.
    ///
    /// Replace-all semantics: the list is sent exactly as given, with no
    /// filtering, deduplication, or reordering. Callers wanting to add
    /// one addon fetch first, merge locally, then submit the full list.
    pub async fn submit(
        &self,
        session: &Session,
        addons: &[AddonDescriptor],
    ) -> Result<(), SyncError> {
        let request = CollectionSetRequest::new(session.auth_key(), addons);
        let response: RemoteResponse<serde_json::Value> =
            self.transport.post(Endpoint::AddonCollectionSet, &request).await?;

        match response {
            RemoteResponse::Success(_) => {
                info!("[SYNC] Submitted collection of {} addons", addons.len());
                Ok(())
            }
            RemoteResponse::Failure(error) => {
                warn!("[SYNC] Collection submit failed: {}", error.message);
                Err(SyncError::RemoteError(error.message))
            }
        }
    }
}
