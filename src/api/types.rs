//! Sync type definitions.
//!
//! Core data structures for the addon sync flow plus the wire-level
//! request/response payloads for the three API operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An established authentication credential for the Stremio API.
///
/// Immutable once created; produced by either login flow and held for
/// the lifetime of one authenticated interaction. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    auth_key: String,
}

impl Session {
    /// Creates a session from a validated auth key.
    pub(crate) fn new(auth_key: String) -> Self {
        Self { auth_key }
    }

    /// Returns the opaque auth key.
    #[must_use]
    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }
}

/// Credentials supplied once by the external collaborator.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// An existing opaque auth key to validate by probing.
    RawKey(String),
    /// Email/password login, optionally through the provider (Facebook) flow.
    Login {
        email: String,
        password: String,
        use_provider: bool,
    },
}

/// One addon record as held by the remote service.
///
/// Only `transportUrl` is interpreted; every other field rides in
/// `extra` and round-trips unchanged when the collection is
/// re-submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonDescriptor {
    /// URL the addon is loaded from.
    #[serde(rename = "transportUrl")]
    pub transport_url: String,
    /// Opaque pass-through fields (manifest, flags, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AddonDescriptor {
    /// Creates a descriptor with the given transport URL and no extra fields.
    #[must_use]
    pub fn new(transport_url: impl Into<String>) -> Self {
        Self {
            transport_url: transport_url.into(),
            extra: Map::new(),
        }
    }
}

/// Ordered addon collection; order determines load order and is
/// preserved end-to-end.
pub type AddonCollection = Vec<AddonDescriptor>;

/// The full `result` payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResult {
    /// Auth key granted by the service.
    #[serde(rename = "authKey")]
    pub auth_key: String,
    /// Remaining payload (user profile etc.), retained for the caller.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a successful password login: the session plus the full
/// remote payload it was derived from.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: Session,
    pub user: LoginResult,
}

/// `/api/login` request body.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    email: &'a str,
    password: &'a str,
    facebook: bool,
}

impl<'a> LoginRequest<'a> {
    pub(crate) fn new(email: &'a str, password: &'a str, use_provider: bool) -> Self {
        Self {
            kind: "Login",
            email,
            password,
            facebook: use_provider,
        }
    }
}

/// `/api/addonCollectionGet` request body.
#[derive(Debug, Serialize)]
pub(crate) struct CollectionGetRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "authKey")]
    auth_key: &'a str,
    /// Always true: the service refreshes the collection server-side
    /// before returning it. Not user-configurable.
    update: bool,
}

impl<'a> CollectionGetRequest<'a> {
    pub(crate) fn new(auth_key: &'a str) -> Self {
        Self {
            kind: "AddonCollectionGet",
            auth_key,
            update: true,
        }
    }
}

/// `/api/addonCollectionSet` request body. Replace-all semantics: the
/// list is the full authoritative collection.
#[derive(Debug, Serialize)]
pub(crate) struct CollectionSetRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "authKey")]
    auth_key: &'a str,
    addons: &'a [AddonDescriptor],
}

impl<'a> CollectionSetRequest<'a> {
    pub(crate) fn new(auth_key: &'a str, addons: &'a [AddonDescriptor]) -> Self {
        Self {
            kind: "AddonCollectionSet",
            auth_key,
            addons,
        }
    }
}

/// `result` payload of `/api/addonCollectionGet`.
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionGetResult {
    pub addons: Vec<AddonDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_auth_key() {
        let session = Session::new("tok1".to_string());
        assert_eq!(session.auth_key(), "tok1");
    }

    #[test]
    fn test_descriptor_round_trip_preserves_extra_fields() {
        let wire = json!({
            "transportUrl": "https://v3-cinemeta.strem.io/manifest.json",
            "manifest": {"id": "com.linvo.cinemeta", "version": "3.0.0"},
            "flags": {"official": true}
        });

        let descriptor: AddonDescriptor = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(
            descriptor.transport_url,
            "https://v3-cinemeta.strem.io/manifest.json"
        );
        assert_eq!(descriptor.extra["flags"]["official"], json!(true));

        // Re-serialization must match the original wire shape exactly.
        assert_eq!(serde_json::to_value(&descriptor).unwrap(), wire);
    }

    #[test]
    fn test_login_request_wire_shape() {
        let request = LoginRequest::new("u@x.com", "p", false);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "type": "Login",
                "email": "u@x.com",
                "password": "p",
                "facebook": false
            })
        );
    }

    #[test]
    fn test_collection_get_request_always_updates() {
        let request = CollectionGetRequest::new("tok1");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "AddonCollectionGet");
        assert_eq!(value["authKey"], "tok1");
        assert_eq!(value["update"], true);
    }

    #[test]
    fn test_collection_set_request_preserves_order() {
        let addons = vec![AddonDescriptor::new("http://b"), AddonDescriptor::new("http://a")];
        let request = CollectionSetRequest::new("tok1", &addons);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["addons"][0]["transportUrl"], "http://b");
        assert_eq!(value["addons"][1]["transportUrl"], "http://a");
    }

    #[test]
    fn test_login_result_retains_extra_fields() {
        let result: LoginResult = serde_json::from_value(json!({
            "authKey": "tok1",
            "user": {"email": "u@x.com", "premium": false}
        }))
        .unwrap();

        assert_eq!(result.auth_key, "tok1");
        assert_eq!(result.extra["user"]["email"], "u@x.com");
    }
}
