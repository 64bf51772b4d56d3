use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::VisitorSession;
use crate::domain::ports::{Clock, ReferenceSource, SessionStore};

pub(crate) type SessionTable = Arc<Mutex<HashMap<String, VisitorSession>>>;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) i64);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0, 0).expect("fixed clock timestamp in range")
    }
}

// Reference source that always yields the same number.
pub(crate) struct FixedReference(pub(crate) u32);

impl ReferenceSource for FixedReference {
    fn next_number(&self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub get: bool,
    pub remove: bool,
    pub update: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    sessions: SessionTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_session(&self, token: impl Into<String>, session: VisitorSession) {
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token.into(), session);
    }

    pub(crate) fn insert_test_token(&self, token: impl Into<String>) {
        self.insert_test_session(token, VisitorSession::new(u64::MAX));
    }

    pub(crate) fn get_test_session(&self, token: &str) -> Option<VisitorSession> {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.get(token).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.len()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn insert(&self, token: String, session: VisitorSession) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<VisitorSession>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.remove(token).is_some())
    }

    async fn update<F, R>(&self, token: &str, apply: F) -> Result<Option<R>, String>
    where
        F: FnOnce(&mut VisitorSession) -> R + Send,
        R: Send,
    {
        if self.failures.update {
            return Err("update failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.get_mut(token).map(apply))
    }
}

// Store wrapper that yields before every operation so concurrent use cases
// interleave between their reads and writes.
#[derive(Clone)]
pub(crate) struct SlowStore {
    pub(crate) inner: RecordingStore,
    pub(crate) delay: Duration,
}

#[async_trait]
impl SessionStore for SlowStore {
    async fn insert(&self, token: String, session: VisitorSession) -> Result<(), String> {
        tokio::time::sleep(self.delay).await;
        self.inner.insert(token, session).await
    }

    async fn get(&self, token: &str) -> Result<Option<VisitorSession>, String> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(token).await
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        tokio::time::sleep(self.delay).await;
        self.inner.remove(token).await
    }

    async fn update<F, R>(&self, token: &str, apply: F) -> Result<Option<R>, String>
    where
        F: FnOnce(&mut VisitorSession) -> R + Send,
        R: Send,
    {
        tokio::time::sleep(self.delay).await;
        self.inner.update(token, apply).await
    }
}
