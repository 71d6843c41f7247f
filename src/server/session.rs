//! In-memory session store
//!
//! Each browser gets an opaque random id in a cookie. The id keys a
//! [`GameSlot`] held in memory; nothing survives a restart.

use crate::core::GameSlot;
use axum::extract::Request;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "pendu_session";

/// Opaque session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u128);

impl SessionId {
    /// Fresh random id
    #[must_use]
    pub fn generate() -> Self {
        Self(rand::random())
    }

    /// Parse the 32-digit hex form used in the cookie
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() != 32 {
            return None;
        }
        u128::from_str_radix(text, 16).ok().map(Self)
    }

    /// Find the session cookie in request headers
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Self::parse(value))
    }

    fn set_cookie_header(self) -> HeaderValue {
        let cookie = format!("{SESSION_COOKIE}={self}; Path=/; HttpOnly; SameSite=Lax");
        // Hex digits and fixed ASCII only
        HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Game slots of every known session
///
/// Cloning is cheap and shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    slots: Arc<Mutex<FxHashMap<SessionId, GameSlot>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the session's slot
    ///
    /// Unknown sessions get a new empty slot. Only starting a game should
    /// call this.
    pub fn with_slot<T>(&self, id: SessionId, f: impl FnOnce(&mut GameSlot) -> T) -> T {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        f(slots.entry(id).or_default())
    }

    /// Run `f` on the session's slot if the session is known
    ///
    /// Returns `None` without touching the map for unknown sessions.
    pub fn with_existing<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSlot) -> T,
    ) -> Option<T> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get_mut(&id).map(f)
    }

    /// Forget the session, returning whether it was known
    pub fn remove(&self, id: SessionId) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(&id).is_some()
    }

    /// Copy of the session's slot, empty if unknown
    #[must_use]
    pub fn snapshot(&self, id: SessionId) -> GameSlot {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(&id).cloned().unwrap_or_default()
    }

    /// Number of sessions holding a slot
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Middleware attaching a [`SessionId`] to every request
///
/// Requests without a valid cookie get a new id, sent back in `Set-Cookie`.
pub async fn session_cookie(mut request: Request, next: Next) -> Response {
    let existing = SessionId::from_headers(request.headers());
    let id = existing.unwrap_or_else(SessionId::generate);
    request.extensions_mut().insert(id);

    let mut response = next.run(request).await;
    if existing.is_none() {
        response.headers_mut().append(SET_COOKIE, id.set_cookie_header());
    }
    response
}
