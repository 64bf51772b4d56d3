use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Redirect, Response};
use axum::Form;
use tracing::{info, warn};

use crate::domain::catalog;
use crate::domain::entities::Flash;
use crate::domain::errors::BookingError;
use crate::interface_adapters::handlers::pages::not_found;
use crate::interface_adapters::handlers::{push_flash, take_flashes};
use crate::interface_adapters::protocol::BookingForm;
use crate::interface_adapters::session::Visitor;
use crate::interface_adapters::state::{AppState, RandomReferences, SystemClock};
use crate::interface_adapters::views;
use crate::use_cases::select_room::SelectRoomUseCase;
use crate::use_cases::submit_booking::SubmitBookingUseCase;

pub const BOOKING_FORM_PATH: &str = "/reservas";
pub const CONFIRMATION_PATH: &str = "/reservas/confirmacion";

pub const GENERIC_BOOKING_ERROR: &str =
    "Error al procesar la reserva. Por favor, intente nuevamente.";

// Booking form, showing the visitor's selected room when there is one.
pub async fn booking_form(State(state): State<AppState>, visitor: Visitor) -> Response {
    let selected = visitor.session.selected_room.and_then(catalog::find);
    let flashes = take_flashes(&state, &visitor).await;
    visitor.respond(views::booking_form(selected, &flashes))
}

// "Reservar esta habitación" link: remembers the room, then opens the form.
#[tracing::instrument(name = "choose_room", skip_all, fields(session = %visitor.tag(), room_id = %room_id))]
pub async fn choose_room(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(room_id): Path<String>,
) -> Response {
    let Some(room) = catalog::find_by_segment(&room_id) else {
        return visitor.respond(not_found().await);
    };

    let use_case = SelectRoomUseCase {
        store: state.session_store(),
    };
    match use_case.execute(&visitor.token, room.id).await {
        Ok(result) => {
            info!(room_id = result.room_id, "room selected");
            visitor.respond(Redirect::to(BOOKING_FORM_PATH))
        }
        Err(err) => {
            warn!(error = %err, "room selection failed");
            let flash = Flash::error("No se pudo seleccionar la habitación");
            redirect_with(&state, &visitor, flash, BOOKING_FORM_PATH).await
        }
    }
}

// Handler for booking submissions. Always answers with a redirect.
#[tracing::instrument(name = "process_booking", skip_all, fields(session = %visitor.tag()))]
pub async fn process_booking(
    State(state): State<AppState>,
    visitor: Visitor,
    form: Result<Form<BookingForm>, FormRejection>,
) -> Response {
    let outcome = match form {
        Ok(Form(form)) => {
            let use_case = SubmitBookingUseCase {
                clock: SystemClock,
                store: state.session_store(),
                references: RandomReferences,
            };
            use_case.execute(&visitor.token, form).await
        }
        Err(rejection) => {
            warn!(error = %rejection, "unreadable booking form");
            let flash = Flash::error(GENERIC_BOOKING_ERROR);
            return redirect_with(&state, &visitor, flash, BOOKING_FORM_PATH).await;
        }
    };

    match outcome {
        Ok(reservation) => {
            info!(
                reference = %reservation.reference,
                room_id = reservation.room_id,
                nights = reservation.stay.nights,
                "reservation created"
            );
            let flash = Flash::success(format!(
                "¡Reserva realizada con éxito! Código: {}",
                reservation.reference
            ));
            redirect_with(&state, &visitor, flash, CONFIRMATION_PATH).await
        }
        Err(err) => {
            warn!(error = %err, "booking rejected");
            let flash = Flash::error(booking_error_message(&err));
            redirect_with(&state, &visitor, flash, BOOKING_FORM_PATH).await
        }
    }
}

// Confirmation page for the last reservation in the session.
pub async fn confirmation(State(state): State<AppState>, visitor: Visitor) -> Response {
    let Some(reservation) = visitor.session.last_reservation.as_ref() else {
        return redirect_with(
            &state,
            &visitor,
            Flash::info("No hay ninguna reserva para mostrar"),
            BOOKING_FORM_PATH,
        )
        .await;
    };

    let flashes = take_flashes(&state, &visitor).await;
    visitor.respond(views::confirmation(reservation, &flashes))
}

async fn redirect_with(state: &AppState, visitor: &Visitor, flash: Flash, to: &str) -> Response {
    push_flash(state, visitor, flash).await;
    visitor.respond(Redirect::to(to))
}

// Maps booking errors to the message shown on the form.
pub fn booking_error_message(err: &BookingError) -> String {
    match err {
        BookingError::MissingField(field) => format!("El campo {field} es requerido"),
        BookingError::InvalidDateRange => {
            "La fecha de salida debe ser posterior a la fecha de entrada".to_string()
        }
        BookingError::InvalidGuests(_) => "El número de huéspedes no es válido".to_string(),
        BookingError::UnparsableDate { .. }
        | BookingError::UnknownRoom(_)
        | BookingError::UnknownSession
        | BookingError::StorageFailure(_) => GENERIC_BOOKING_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_field_is_missing_then_message_names_it() {
        let message = booking_error_message(&BookingError::MissingField("telefono"));

        assert_eq!(message, "El campo telefono es requerido");
    }

    #[test]
    fn when_date_is_unparsable_then_generic_message_is_used() {
        let message = booking_error_message(&BookingError::UnparsableDate {
            field: "check_in",
            value: "mañana".to_string(),
        });

        assert_eq!(message, GENERIC_BOOKING_ERROR);
    }
}
