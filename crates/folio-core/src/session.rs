//! Admin session gate.
//!
//! The gate decides which of the two views (public vs admin) a front
//! end mounts; it never gates data fetches. The session is an explicit
//! capability token with an expiry, persisted behind the small
//! [`SessionStore`] interface - nothing else reads or writes the
//! persisted record.
//!
//! The backend's `/auth` exchange only promises `{ok: bool}`. When it
//! additionally supplies `token`/`expires_in` those are adopted;
//! otherwise a local token is minted with a default lifetime so the
//! client always holds an expiring credential.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::BackendClient;
use crate::constants::{SESSION_DEFAULT_TTL, SESSION_FILE};
use crate::ident::allocate_id;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Capability token held while the admin view is unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub value: String,
    pub issued_at: u64,
    pub expires_at: u64,
}

impl SessionToken {
    pub fn is_expired(&self) -> bool {
        now_secs() >= self.expires_at
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("failed to read session: {0}")]
    Read(String),
    #[error("failed to parse session: {0}")]
    Parse(String),
    #[error("failed to write session: {0}")]
    Write(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid password")]
    Rejected,
    #[error("auth request failed: {0}")]
    Network(String),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Persistence boundary for the session record.
pub trait SessionStore {
    fn load(&self) -> Result<Option<SessionToken>, SessionStoreError>;
    fn save(&self, token: &SessionToken) -> Result<(), SessionStoreError>;
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// JSON-file store under a data directory.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    /// Store at the platform data directory (`<data_dir>/folio/`).
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(&dir.join("folio")))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<SessionToken>, SessionStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(|e| SessionStoreError::Parse(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionStoreError::Read(e.to_string())),
        }
    }

    fn save(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionStoreError::Write(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(token)
            .map_err(|e| SessionStoreError::Write(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SessionStoreError::Write(e.to_string()))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Write(e.to_string())),
        }
    }
}

/// In-memory session plus its persistence boundary.
pub struct SessionGate<S: SessionStore> {
    store: S,
    token: Option<SessionToken>,
}

impl<S: SessionStore> SessionGate<S> {
    /// Rebuild the gate from persisted state. An expired or unreadable
    /// record yields an unauthenticated gate rather than an error - the
    /// public view is always a safe place to land.
    pub fn restore(store: S) -> Self {
        let token = match store.load() {
            Ok(token) => token.filter(|t| !t.is_expired()),
            Err(err) => {
                tracing::warn!(error = %err, "could not restore session");
                None
            }
        };
        Self { store, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_expired())
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Exchange the password for a session. An affirmative response
    /// yields a persisted token; anything non-affirmative is a
    /// rejection.
    pub async fn login(
        &mut self,
        client: &BackendClient,
        password: &str,
    ) -> Result<(), SessionError> {
        let body = client
            .authenticate(password)
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Err(SessionError::Rejected);
        }

        let issued_at = now_secs();
        let ttl = body
            .get("expires_in")
            .and_then(Value::as_u64)
            .unwrap_or(SESSION_DEFAULT_TTL.as_secs());
        let value = body
            .get("token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(allocate_id);

        let token = SessionToken {
            value,
            issued_at,
            expires_at: issued_at + ttl,
        };
        self.store.save(&token)?;
        self.token = Some(token);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), SessionStoreError> {
        self.token = None;
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::cell::RefCell;
    use tempfile::tempdir;

    /// Store that only lives in memory, shared across gate rebuilds.
    #[derive(Default)]
    struct MemoryStore(RefCell<Option<SessionToken>>);

    impl SessionStore for &MemoryStore {
        fn load(&self) -> Result<Option<SessionToken>, SessionStoreError> {
            Ok(self.0.borrow().clone())
        }
        fn save(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
            *self.0.borrow_mut() = Some(token.clone());
            Ok(())
        }
        fn clear(&self) -> Result<(), SessionStoreError> {
            *self.0.borrow_mut() = None;
            Ok(())
        }
    }

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(&CoreConfig::new(server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn affirmative_auth_persists_across_gate_rebuilds() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth").json_body(json!({ "password": "hunter2" }));
            then.status(200).json_body(json!({ "ok": true }));
        });

        let store = MemoryStore::default();
        let mut gate = SessionGate::restore(&store);
        assert!(!gate.is_authenticated());

        gate.login(&client_for(&server), "hunter2").await.unwrap();
        assert!(gate.is_authenticated());

        // Simulated reload: new gate, same persistent store, no
        // credentials re-submitted.
        let rebuilt = SessionGate::restore(&store);
        assert!(rebuilt.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_password_leaves_the_gate_closed() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth");
            then.status(200).json_body(json!({ "ok": false }));
        });

        let store = MemoryStore::default();
        let mut gate = SessionGate::restore(&store);
        let err = gate.login(&client_for(&server), "wrong").await.unwrap_err();
        assert!(matches!(err, SessionError::Rejected));
        assert!(!gate.is_authenticated());
        assert!(store.0.borrow().is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error_not_a_rejection() {
        let client = BackendClient::new(&CoreConfig::new("http://127.0.0.1:1")).unwrap();
        let store = MemoryStore::default();
        let mut gate = SessionGate::restore(&store);
        let err = gate.login(&client, "hunter2").await.unwrap_err();
        assert!(matches!(err, SessionError::Network(_)));
    }

    #[tokio::test]
    async fn server_issued_token_and_expiry_are_adopted() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth");
            then.status(200)
                .json_body(json!({ "ok": true, "token": "issued-token", "expires_in": 60 }));
        });

        let store = MemoryStore::default();
        let mut gate = SessionGate::restore(&store);
        gate.login(&client_for(&server), "hunter2").await.unwrap();

        let token = gate.token().unwrap();
        assert_eq!(token.value, "issued-token");
        assert_eq!(token.expires_at, token.issued_at + 60);
    }

    #[test]
    fn expired_tokens_do_not_restore() {
        let store = MemoryStore::default();
        (&store)
            .save(&SessionToken {
                value: "old".into(),
                issued_at: 0,
                expires_at: 1,
            })
            .unwrap();

        let gate = SessionGate::restore(&store);
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn file_store_roundtrip_and_logout() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        assert!(store.load().unwrap().is_none());

        let token = SessionToken {
            value: "abc".into(),
            issued_at: 10,
            expires_at: 20,
        };
        store.save(&token).unwrap();
        assert_eq!(store.load().unwrap(), Some(token));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
