use crate::domain::catalog;
use crate::domain::errors::BookingError;
use crate::domain::ports::SessionStore;

// Response returned by the room selection use case.
pub struct SelectRoomResponse {
    pub room_id: u32,
    pub room_name: &'static str,
}

// Records a catalog room as the visitor's selected room.
pub struct SelectRoomUseCase<S> {
    pub store: S,
}

impl<S> SelectRoomUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self, token: &str, room_id: u32) -> Result<SelectRoomResponse, BookingError> {
        let room = catalog::find(room_id).ok_or(BookingError::UnknownRoom(room_id))?;

        self.store
            .update(token, |session| session.selected_room = Some(room.id))
            .await
            .map_err(BookingError::StorageFailure)?
            .ok_or(BookingError::UnknownSession)?;

        Ok(SelectRoomResponse {
            room_id: room.id,
            room_name: room.name,
        })
    }
}
