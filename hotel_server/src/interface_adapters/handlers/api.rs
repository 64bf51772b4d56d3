use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum::response::Response;

use crate::domain::errors::BookingError;
use crate::interface_adapters::protocol::SelectRoomResponse;
use crate::interface_adapters::session::Visitor;
use crate::interface_adapters::state::AppState;
use crate::use_cases::select_room::SelectRoomUseCase;

// JSON endpoint used by room pages to remember the visitor's choice.
#[tracing::instrument(name = "select_room", skip_all, fields(session = %visitor.tag(), room_id = %room_id))]
pub async fn select_room(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(room_id): Path<String>,
) -> Response {
    let Ok(parsed) = room_id.parse::<u32>() else {
        return visitor.respond(select_room_error(BookingError::UnknownRoom(0)));
    };

    let use_case = SelectRoomUseCase {
        store: state.session_store(),
    };

    match use_case.execute(&visitor.token, parsed).await {
        Ok(result) => {
            tracing::info!(room_id = result.room_id, "room selected");
            visitor.respond((
                StatusCode::OK,
                Json(SelectRoomResponse {
                    success: true,
                    message: format!("{} seleccionada", result.room_name),
                }),
            ))
        }
        Err(err) => visitor.respond(select_room_error(err)),
    }
}

fn select_room_error(err: BookingError) -> (StatusCode, Json<SelectRoomResponse>) {
    let (status, message) = match err {
        BookingError::UnknownRoom(_) => (StatusCode::NOT_FOUND, "Habitación no encontrada"),
        other => {
            tracing::error!(error = %other, "failed to select room");
            (StatusCode::BAD_GATEWAY, "No se pudo seleccionar la habitación")
        }
    };

    (
        status,
        Json(SelectRoomResponse {
            success: false,
            message: message.to_string(),
        }),
    )
}
