//! JSON-over-HTTP transport for the Stremio API.
//!
//! All three operations are POSTs with a JSON body to a fixed set of
//! endpoints. A domain-level failure arrives as an `error` field inside
//! an otherwise well-formed JSON response and is kept distinct from
//! transport-level failures (network errors, non-JSON bodies).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SyncError;

/// Base URL of the official Stremio API.
pub const DEFAULT_API_BASE: &str = "https://api.strem.io";

/// The fixed endpoint allow-list. Nothing else is ever requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Password/provider login.
    Login,
    /// Fetch the user's addon collection.
    AddonCollectionGet,
    /// Replace the user's addon collection.
    AddonCollectionSet,
}

impl Endpoint {
    /// Returns the request path for this endpoint.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/api/login",
            Self::AddonCollectionGet => "/api/addonCollectionGet",
            Self::AddonCollectionSet => "/api/addonCollectionSet",
        }
    }
}

/// Domain error payload carried in a response's `error` field.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable message, surfaced to callers verbatim.
    pub message: String,
}

/// A parsed API response: exactly one of success payload or domain error.
#[derive(Debug)]
pub enum RemoteResponse<R> {
    /// The `result` field.
    Success(R),
    /// The `error` field.
    Failure(ErrorPayload),
}

/// Raw response shape before classification.
#[derive(Debug, Deserialize)]
struct RawResponse<R> {
    result: Option<R>,
    error: Option<ErrorPayload>,
}

/// HTTP transport bound to one API deployment.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    base_url: String,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    /// Creates a transport against the official API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates a transport against a custom deployment (or a test mock).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("stremio-addon-sync")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one JSON POST and classifies the JSON response.
    ///
    /// Network errors and bodies that are not valid API JSON surface as
    /// `SyncError::Transport`; a domain `error` field comes back as
    /// `RemoteResponse::Failure` for the caller to interpret.
    pub async fn post<P, R>(
        &self,
        endpoint: Endpoint,
        payload: &P,
    ) -> Result<RemoteResponse<R>, SyncError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!("[SYNC] POST {}", url);

        let response = self.client.post(&url).json(payload).send().await.map_err(|e| {
            warn!("[SYNC] HTTP request failed: {}", e);
            SyncError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!("[SYNC] Failed to read response body: {}", e);
            SyncError::Transport(e.to_string())
        })?;

        // The API signals domain failures in the body, not the status
        // line, so the body is parsed regardless of status.
        let raw: RawResponse<R> = serde_json::from_slice(&body).map_err(|e| {
            warn!("[SYNC] Non-JSON response ({}): {}", status, e);
            SyncError::Transport(format!("invalid response body ({}): {}", status, e))
        })?;

        debug!("[SYNC] Response: {}", status);
        classify(endpoint, raw)
    }
}

/// Enforces the one-of-{result, error} response invariant. A domain
/// error wins when both are present; neither present is a transport
/// failure.
fn classify<R>(endpoint: Endpoint, raw: RawResponse<R>) -> Result<RemoteResponse<R>, SyncError> {
    match (raw.result, raw.error) {
        (_, Some(error)) => {
            debug!("[SYNC] {} returned domain error: {}", endpoint.path(), error.message);
            Ok(RemoteResponse::Failure(error))
        }
        (Some(result), None) => Ok(RemoteResponse::Success(result)),
        (None, None) => {
            warn!("[SYNC] {} response carried neither result nor error", endpoint.path());
            Err(SyncError::Transport(format!(
                "{} response carried neither result nor error",
                endpoint.path()
            )))
        }
    }
}
