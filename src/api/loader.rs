//! Addon loader boundary.
//!
//! The actual "load addon by transport URL" work belongs to the
//! consuming application. This module defines the seam and the
//! sequential iteration contract: one invocation per descriptor, in
//! collection order, awaiting each load before starting the next.

use thiserror::Error;
use tracing::{debug, info};

use super::types::AddonDescriptor;

/// Unrecoverable failure reported by an addon loader.
///
/// Returning this aborts the remaining loads. Loaders that want to
/// continue past individual failures handle them internally and return
/// `Ok`.
#[derive(Debug, Clone, Error)]
#[error("Failed to load addon from {url}: {message}")]
pub struct LoadError {
    /// Transport URL of the addon that failed.
    pub url: String,
    /// Loader-supplied description of the failure.
    pub message: String,
}

impl LoadError {
    /// Creates a load error for the given addon URL.
    #[must_use]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// External collaborator that loads one addon by its transport URL.
#[allow(async_fn_in_trait)]
pub trait AddonLoader {
    /// Loads the addon served at `transport_url`.
    async fn load(&mut self, transport_url: &str) -> Result<(), LoadError>;
}

/// Invokes `loader` once per descriptor, sequentially and in order.
///
/// Load N+1 is not started until load N resolves, preserving the
/// observable load order. The first loader error aborts the remaining
/// entries and propagates.
pub async fn load_collection<L: AddonLoader>(
    addons: &[AddonDescriptor],
    loader: &mut L,
) -> Result<(), super::SyncError> {
    for (index, addon) in addons.iter().enumerate() {
        debug!(
            "[SYNC] Loading addon {}/{}: {}",
            index + 1,
            addons.len(),
            addon.transport_url
        );
        loader.load(&addon.transport_url).await?;
    }

    info!("[SYNC] Loaded {} addons", addons.len());
    Ok(())
}
