use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::VisitorSession;
use crate::domain::ports::{Clock, ReferenceSource, SessionStore};

// Stylesheet and room images shipped with the crate.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

// Application state holding visitor session storage.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<String, VisitorSession>>>,
    pub session_ttl_seconds: u64,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(session_ttl_seconds: u64) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            session_ttl_seconds,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    pub fn session_store(&self) -> InMemorySessionStore {
        InMemorySessionStore {
            sessions: self.sessions.clone(),
        }
    }
}

// In-memory session store adapter for the hotel site.
#[derive(Clone)]
pub struct InMemorySessionStore {
    pub sessions: Arc<Mutex<HashMap<String, VisitorSession>>>,
}

impl InMemorySessionStore {
    // Drop every session whose expiry is at or before `now`.
    pub async fn purge_expired(&self, now: u64) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.is_live(now));
        before - sessions.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, token: String, session: VisitorSession) -> Result<(), String> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<VisitorSession>, String> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions.remove(token).is_some())
    }

    async fn update<F, R>(&self, token: &str, apply: F) -> Result<Option<R>, String>
    where
        F: FnOnce(&mut VisitorSession) -> R + Send,
        R: Send,
    {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions.get_mut(token).map(apply))
    }
}

// System clock adapter.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// Uniform five-digit reservation numbers from the thread-local RNG.
#[derive(Clone)]
pub struct RandomReferences;

impl ReferenceSource for RandomReferences {
    fn next_number(&self) -> u32 {
        rand::thread_rng().gen_range(10_000..=99_999)
    }
}
