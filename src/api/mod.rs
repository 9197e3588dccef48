//! Stremio API client module.
//!
//! Authenticates a user against the Stremio API and synchronizes the
//! user's addon collection. The UI that collects credentials and the
//! code that actually mounts addons are external collaborators; this
//! module only covers the request/response contract.

pub mod client;
pub mod collection;
pub mod loader;
pub mod session;
pub mod transport;
pub mod types;

use thiserror::Error;

pub use client::StremioClient;
pub use collection::CollectionSync;
pub use loader::{AddonLoader, LoadError, load_collection};
pub use session::SessionEstablisher;
pub use transport::{DEFAULT_API_BASE, Endpoint, ErrorPayload, RemoteResponse, Transport};
pub use types::{AddonCollection, AddonDescriptor, Credentials, LoginOutcome, LoginResult, Session};

/// Sync error types.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network failure or a response body that is not valid API JSON.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Raw auth key was blank, or the probe fetch rejected it.
    #[error("Invalid auth key")]
    InvalidCredential,

    /// Login endpoint returned a domain error; message is remote-supplied.
    #[error("Login rejected: {0}")]
    LoginRejected(String),

    /// Fetch/submit returned a domain error for an established session.
    #[error("Remote error: {0}")]
    RemoteError(String),

    /// An addon loader signalled an unrecoverable failure.
    #[error(transparent)]
    AddonLoad(#[from] LoadError),
}
