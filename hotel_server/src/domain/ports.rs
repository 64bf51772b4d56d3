use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::VisitorSession;

// Port for visitor session storage used by the use cases.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, session: VisitorSession) -> Result<(), String>;
    async fn get(&self, token: &str) -> Result<Option<VisitorSession>, String>;
    async fn remove(&self, token: &str) -> Result<bool, String>;

    // Apply `apply` to the stored session in a single critical section.
    // Returns `Ok(None)` when no session exists under `token`.
    async fn update<F, R>(&self, token: &str, apply: F) -> Result<Option<R>, String>
    where
        F: FnOnce(&mut VisitorSession) -> R + Send,
        R: Send;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_epoch_seconds(&self) -> u64 {
        u64::try_from(self.now().timestamp()).unwrap_or_default()
    }
}

// Port for the numeric part of reservation references.
pub trait ReferenceSource: Send + Sync {
    fn next_number(&self) -> u32;
}
