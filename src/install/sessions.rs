//! Cookie-backed in-memory session store.
//!
//! # Design Decisions
//! - Sessions live in a `DashMap` keyed by UUID; the cookie carries only
//!   the ID
//! - The middleware attaches a [`SessionHandle`] to request extensions, so
//!   step handlers can read and write session data without knowing the
//!   store exists
//! - The cookie is issued only for fresh sessions; expired sessions are
//!   dropped on next contact

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::{self, Next};
use axum::Router;
use dashmap::DashMap;
use uuid::Uuid;

use crate::config::schema::BootstrapConfig;

/// A live session, shared between the store and request extensions.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: Uuid,
    data: Arc<DashMap<String, serde_json::Value>>,
}

impl SessionHandle {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            data: Arc::new(DashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.data.get(key).map(|v| v.value().clone())
    }

    pub fn insert(&self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    pub fn remove(&self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key).map(|(_, v)| v)
    }
}

struct Entry {
    handle: SessionHandle,
    created: Instant,
}

/// In-memory session store.
pub struct SessionStore {
    cookie_name: String,
    ttl: Duration,
    sessions: DashMap<Uuid, Entry>,
}

impl SessionStore {
    pub fn new(config: &BootstrapConfig) -> Self {
        Self {
            cookie_name: config.session.cookie_name.clone(),
            ttl: Duration::from_secs(config.session.ttl_secs),
            sessions: DashMap::new(),
        }
    }

    /// Find the session named by the request cookie, or create a fresh one.
    /// The boolean is true when a new session (and cookie) was created.
    fn attach(&self, headers: &HeaderMap) -> (SessionHandle, bool) {
        self.sweep();

        if let Some(id) = self.session_id(headers) {
            if let Some(entry) = self.sessions.get(&id) {
                return (entry.handle.clone(), false);
            }
        }

        let handle = SessionHandle::new();
        self.sessions.insert(
            handle.id,
            Entry {
                handle: handle.clone(),
                created: Instant::now(),
            },
        );
        (handle, true)
    }

    /// Drop every expired session, revisited or not; abandoned sessions
    /// must not accumulate for the lifetime of the service.
    fn sweep(&self) {
        self.sessions
            .retain(|_, entry| entry.created.elapsed() < self.ttl);
    }

    fn session_id(&self, headers: &HeaderMap) -> Option<Uuid> {
        let raw = headers.get(COOKIE)?.to_str().ok()?;
        raw.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name == self.cookie_name {
                Uuid::parse_str(value).ok()
            } else {
                None
            }
        })
    }

    fn cookie_for(&self, id: Uuid) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            self.cookie_name, id
        )
    }
}

pub fn install(app: Router, config: &BootstrapConfig) -> Router {
    let store = Arc::new(SessionStore::new(config));

    app.layer(middleware::from_fn(move |mut req: Request, next: Next| {
        let store = store.clone();
        async move {
            let (session, fresh) = store.attach(req.headers());
            let id = session.id;
            req.extensions_mut().insert(session);

            let mut response = next.run(req).await;
            if fresh {
                if let Ok(value) = HeaderValue::from_str(&store.cookie_for(id)) {
                    response.headers_mut().append(SET_COOKIE, value);
                }
            }
            response
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(&BootstrapConfig::default())
    }

    #[test]
    fn fresh_session_without_cookie() {
        let store = store();
        let (_, fresh) = store.attach(&HeaderMap::new());
        assert!(fresh);
    }

    #[test]
    fn cookie_resumes_session() {
        let store = store();
        let (session, _) = store.attach(&HeaderMap::new());
        session.insert("step", serde_json::json!("a"));

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("form.sid={}", session.id)).unwrap(),
        );

        let (resumed, fresh) = store.attach(&headers);
        assert!(!fresh);
        assert_eq!(resumed.id, session.id);
        assert_eq!(resumed.get("step"), Some(serde_json::json!("a")));
    }

    #[test]
    fn unknown_cookie_gets_fresh_session() {
        let store = store();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("form.sid={}", Uuid::new_v4())).unwrap(),
        );

        let (_, fresh) = store.attach(&headers);
        assert!(fresh);
    }

    #[test]
    fn expired_session_is_replaced() {
        let mut config = BootstrapConfig::default();
        config.session.ttl_secs = 0;
        let store = SessionStore::new(&config);

        let (session, _) = store.attach(&HeaderMap::new());
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("form.sid={}", session.id)).unwrap(),
        );

        let (replacement, fresh) = store.attach(&headers);
        assert!(fresh);
        assert_ne!(replacement.id, session.id);
    }

    #[test]
    fn abandoned_expired_sessions_are_evicted() {
        let mut config = BootstrapConfig::default();
        config.session.ttl_secs = 0;
        let store = SessionStore::new(&config);

        let (abandoned, _) = store.attach(&HeaderMap::new());

        // A different client with no cookie still triggers the sweep; the
        // stale entry goes away without its owner ever coming back.
        let _ = store.attach(&HeaderMap::new());
        assert!(!store.sessions.contains_key(&abandoned.id));
    }
}
