use crate::domain::entities::Flash;
use crate::domain::errors::BookingError;
use crate::domain::ports::SessionStore;

// Queues and drains one-shot messages on a visitor session.
pub struct FlashUseCase<S> {
    pub store: S,
}

impl<S> FlashUseCase<S>
where
    S: SessionStore,
{
    pub async fn push(&self, token: &str, flash: Flash) -> Result<(), BookingError> {
        self.store
            .update(token, |session| session.flashes.push(flash))
            .await
            .map_err(BookingError::StorageFailure)?
            .ok_or(BookingError::UnknownSession)
    }

    pub async fn take(&self, token: &str) -> Result<Vec<Flash>, BookingError> {
        let flashes = self
            .store
            .update(token, |session| std::mem::take(&mut session.flashes))
            .await
            .map_err(BookingError::StorageFailure)?;

        Ok(flashes.unwrap_or_default())
    }
}
