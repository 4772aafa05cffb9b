//! Per-browser session state.
//!
//! Each browser gets a random session id in a cookie. The id keys an in-memory
//! `Session` record that lives until the process exits. Handlers take a snapshot,
//! run any remote calls without holding the lock, then write results back.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::generation::tone::Tone;

pub const SESSION_COOKIE: &str = "writer_session";

/// Everything the writer page remembers for one browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    authenticated: bool,
    pub skeleton: Option<String>,
    pub blogpost: Option<String>,
    /// Last submitted form inputs, re-rendered on the next page view.
    pub field_of_work: String,
    pub example_posts: String,
    pub tone: Tone,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Opens the gate when `entered` equals the configured passcode.
    /// A wrong passcode leaves the current state untouched.
    pub fn authenticate(&mut self, entered: &str, passcode: &str) -> bool {
        if passcode_matches(entered, passcode) {
            self.authenticated = true;
        }
        self.authenticated
    }
}

/// Plain equality check; no lockout, no expiry.
pub fn passcode_matches(entered: &str, passcode: &str) -> bool {
    entered == passcode
}

/// In-memory session table shared by all handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the session for `id`, creating a fresh one when the id
    /// is missing or unknown. The returned id is the one the browser must keep.
    pub async fn get_or_create(&self, id: Option<Uuid>) -> (Uuid, Session) {
        let mut sessions = self.sessions.lock().await;
        if let Some(id) = id {
            if let Some(session) = sessions.get(&id) {
                return (id, session.clone());
            }
        }
        let id = Uuid::new_v4();
        sessions.insert(id, Session::default());
        info!("Created session {id}");
        (id, Session::default())
    }

    /// Applies `f` to the stored session. Unknown ids start from a default session.
    pub async fn update<F>(&self, id: Uuid, f: F) -> Session
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(id).or_default();
        f(session);
        debug!("Updated session {id}");
        session.clone()
    }
}

/// Reads the session id from the request's `Cookie` header(s).
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to `id`.
pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
