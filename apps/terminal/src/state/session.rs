//! # Session State
//!
//! The signed-in session and its persistence.
//!
//! The `token` / `username` / `is_admin` triple lives in `session.toml`
//! under the platform config directory. Login writes it, logout removes it,
//! startup restores it.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use rideline_api::config::project_dirs;
use rideline_core::Session;

// =============================================================================
// Session Store
// =============================================================================

/// Where the session survives between runs.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// None disables persistence (tests, ephemeral shells).
    path: Option<PathBuf>,
}

impl SessionStore {
    /// The platform-default `session.toml` location.
    pub fn at_default_location() -> Self {
        SessionStore {
            path: project_dirs().map(|dirs| dirs.config_dir().join("session.toml")),
        }
    }

    /// A store at an explicit path.
    pub fn at_path(path: PathBuf) -> Self {
        SessionStore { path: Some(path) }
    }

    /// A store that never touches the disk.
    pub fn ephemeral() -> Self {
        SessionStore { path: None }
    }

    /// Reads the persisted session, if any. Unreadable files are treated as
    /// signed-out, not as fatal.
    pub fn load(&self) -> Option<Session> {
        let path = self.path.as_ref()?;
        let raw = fs::read_to_string(path).ok()?;
        match toml::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Ignoring unreadable session file");
                None
            }
        }
    }

    /// Persists the session. Failure is logged, never propagated; the
    /// in-memory session stays valid for this run either way.
    pub fn save(&self, session: &Session) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(error = %e, "Could not create config directory");
                return;
            }
        }
        match toml::to_string_pretty(session) {
            Ok(raw) => {
                if let Err(e) = fs::write(path, raw) {
                    warn!(error = %e, path = %path.display(), "Could not persist session");
                }
            }
            Err(e) => warn!(error = %e, "Could not serialize session"),
        }
    }

    /// Removes the persisted session.
    pub fn clear(&self) {
        if let Some(path) = self.path.as_ref() {
            if path.exists() {
                if let Err(e) = fs::remove_file(path) {
                    warn!(error = %e, path = %path.display(), "Could not remove session file");
                }
            }
        }
    }
}

// =============================================================================
// Session State
// =============================================================================

/// Shared handle on the current session.
#[derive(Debug, Clone)]
pub struct SessionState {
    current: Arc<RwLock<Option<Session>>>,
    store: SessionStore,
}

impl SessionState {
    /// Starts signed-out with the given store.
    pub fn new(store: SessionStore) -> Self {
        SessionState {
            current: Arc::new(RwLock::new(None)),
            store,
        }
    }

    /// Starts from whatever the store has persisted.
    pub fn restore(store: SessionStore) -> Self {
        let session = store.load();
        if let Some(s) = &session {
            debug!(username = %s.username, "Restored persisted session");
        }
        SessionState {
            current: Arc::new(RwLock::new(session)),
            store,
        }
    }

    /// Stores the session and persists it.
    pub fn login(&self, session: Session) {
        self.store.save(&session);
        *self.current.write().expect("session lock poisoned") = Some(session);
    }

    /// Clears the session and its persisted copy.
    pub fn logout(&self) {
        self.store.clear();
        *self.current.write().expect("session lock poisoned") = None;
    }

    /// A copy of the current session, if signed in.
    pub fn current(&self) -> Option<Session> {
        self.current.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current().map(|s| s.is_admin).unwrap_or(false)
    }

    pub fn username(&self) -> Option<String> {
        self.current().map(|s| s.username)
    }

    pub fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }
}
