use uuid::Uuid;

use crate::domain::entities::VisitorSession;
use crate::domain::errors::BookingError;
use crate::domain::ports::{Clock, SessionStore};

// Response returned by the open session use case.
pub struct OpenSessionResponse {
    pub token: String,
    pub session: VisitorSession,
    // True when a new token was issued for this request.
    pub fresh: bool,
}

// Resolves the visitor's cookie token to a live session, creating one if needed.
pub struct OpenSessionUseCase<C, S> {
    pub clock: C,
    pub store: S,
    pub ttl_seconds: u64,
}

impl<C, S> OpenSessionUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    pub async fn execute(&self, presented: Option<String>) -> Result<OpenSessionResponse, BookingError> {
        let now = self.clock.now_epoch_seconds();
        let expires_at = now.saturating_add(self.ttl_seconds);

        if let Some(token) = presented {
            // Only the expiry is written back; other fields stay as stored.
            let refreshed = self
                .store
                .update(&token, |session| {
                    session.is_live(now).then(|| {
                        session.expires_at = expires_at;
                        session.clone()
                    })
                })
                .await
                .map_err(BookingError::StorageFailure)?;

            match refreshed {
                Some(Some(session)) => {
                    return Ok(OpenSessionResponse {
                        token,
                        session,
                        fresh: false,
                    });
                }
                Some(None) => {
                    // Best-effort cleanup of expired session.
                    let _ = self.store.remove(&token).await;
                }
                None => {}
            }
        }

        let token = Uuid::new_v4().to_string();
        let session = VisitorSession::new(expires_at);
        self.store
            .insert(token.clone(), session.clone())
            .await
            .map_err(BookingError::StorageFailure)?;

        Ok(OpenSessionResponse {
            token,
            session,
            fresh: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::select_room::SelectRoomUseCase;
    use crate::use_cases::test_support::{FailureFlags, FixedClock, RecordingStore, SlowStore};
    use std::time::Duration;

    fn use_case(store: RecordingStore, now: i64) -> OpenSessionUseCase<FixedClock, RecordingStore> {
        OpenSessionUseCase {
            clock: FixedClock(now),
            store,
            ttl_seconds: 3600,
        }
    }

    #[tokio::test]
    async fn when_no_token_is_presented_then_fresh_session_is_stored() {
        let store = RecordingStore::new();

        let result = use_case(store.clone(), 1_700_000_000)
            .execute(None)
            .await
            .expect("expected session to open");

        assert!(result.fresh);
        assert_eq!(result.session.expires_at, 1_700_003_600);
        let saved = store
            .get_test_session(&result.token)
            .expect("expected session to be stored");
        assert!(saved.selected_room.is_none());
        assert!(saved.last_reservation.is_none());
    }

    #[tokio::test]
    async fn when_token_is_live_then_session_is_reused_and_expiry_extended() {
        let store = RecordingStore::new();
        let mut session = VisitorSession::new(1_700_000_100);
        session.selected_room = Some(2);
        store.insert_test_session("token-1", session);

        let result = use_case(store.clone(), 1_700_000_000)
            .execute(Some("token-1".to_string()))
            .await
            .expect("expected session to open");

        assert!(!result.fresh);
        assert_eq!(result.token, "token-1");
        assert_eq!(result.session.selected_room, Some(2));
        let saved = store.get_test_session("token-1").expect("expected session");
        assert_eq!(saved.expires_at, 1_700_003_600);
    }

    #[tokio::test]
    async fn when_token_is_expired_then_it_is_removed_and_replaced() {
        let store = RecordingStore::new();
        store.insert_test_session("token-1", VisitorSession::new(1_700_000_000));

        let result = use_case(store.clone(), 1_700_000_000)
            .execute(Some("token-1".to_string()))
            .await
            .expect("expected session to open");

        assert!(result.fresh);
        assert_ne!(result.token, "token-1");
        assert!(store.get_test_session("token-1").is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn when_token_is_unknown_then_it_is_not_adopted() {
        let store = RecordingStore::new();

        let result = use_case(store.clone(), 1_700_000_000)
            .execute(Some("forged-token".to_string()))
            .await
            .expect("expected session to open");

        assert!(result.fresh);
        assert_ne!(result.token, "forged-token");
        assert!(store.get_test_session("forged-token").is_none());
    }

    #[tokio::test]
    async fn when_store_update_fails_then_returns_storage_failure() {
        let store = RecordingStore::new().with_failures(FailureFlags {
            update: true,
            ..FailureFlags::default()
        });

        let result = use_case(store, 1_700_000_000)
            .execute(Some("token-1".to_string()))
            .await;

        assert!(matches!(result, Err(BookingError::StorageFailure(_))));
    }

    #[tokio::test]
    async fn when_session_changes_during_refresh_then_change_is_kept() {
        let recording = RecordingStore::new();
        recording.insert_test_token("token-1");
        let store = SlowStore {
            inner: recording.clone(),
            delay: Duration::from_millis(20),
        };
        let refresh = OpenSessionUseCase {
            clock: FixedClock(1_700_000_000),
            store: store.clone(),
            ttl_seconds: 3600,
        };
        let selection = SelectRoomUseCase { store };

        let (opened, selected) = tokio::join!(
            refresh.execute(Some("token-1".to_string())),
            selection.execute("token-1", 2),
        );
        opened.expect("expected session to open");
        selected.expect("expected selection to succeed");

        let saved = recording.get_test_session("token-1").expect("expected session");
        assert_eq!(saved.selected_room, Some(2));
        assert_eq!(saved.expires_at, 1_700_003_600);
    }
}
