//! Stremio addon sync
//!
//! Authenticates a user against the Stremio API and synchronizes the
//! user's addon collection.
//!
//! # Architecture
//!
//! - **Transport**: JSON-over-HTTP POST to the fixed API endpoints
//! - **Session Establisher**: raw-key probe validation and password login
//! - **Collection Synchronizer**: ordered fetch and replace-all submit
//! - **Addon Loader Hook**: sequential per-addon load at the app boundary
//!
//! # Usage
//!
//! ```no_run
//! use stremio_addon_sync::StremioClient;
//!
//! # async fn run() -> Result<(), stremio_addon_sync::SyncError> {
//! let client = StremioClient::new();
//! let outcome = client.establish_by_login("u@x.com", "secret", false).await?;
//! let addons = client.fetch_collection(&outcome.session).await?;
//! # Ok(())
//! # }
//! ```

// Clippy configuration - allow common patterns
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod api;
pub mod logging;

// Re-export main types
pub use api::{
    AddonCollection, AddonDescriptor, AddonLoader, Credentials, LoadError, LoginOutcome,
    LoginResult, Session, StremioClient, SyncError,
};
