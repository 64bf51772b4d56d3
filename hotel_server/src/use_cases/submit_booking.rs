use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::catalog::{DEFAULT_ROOM_ID, REFERENCE_NIGHTLY_RATE};
use crate::domain::entities::{GuestContact, Reservation, Stay};
use crate::domain::errors::BookingError;
use crate::domain::ports::{Clock, ReferenceSource, SessionStore};
use crate::interface_adapters::protocol::BookingForm;

const REFERENCE_PREFIX: &str = "RES";
const DATE_FORMAT: &str = "%Y-%m-%d";

// Booking submission use case with injected dependencies.
pub struct SubmitBookingUseCase<C, S, R> {
    pub clock: C,
    pub store: S,
    pub references: R,
}

impl<C, S, R> SubmitBookingUseCase<C, S, R>
where
    C: Clock,
    S: SessionStore,
    R: ReferenceSource,
{
    pub async fn execute(&self, token: &str, form: BookingForm) -> Result<Reservation, BookingError> {
        // Presence is checked in form order; the first gap wins.
        let first_name = required("nombre", form.nombre)?;
        let last_name = required("apellido", form.apellido)?;
        let email = required("email", form.email)?;
        let phone = required("telefono", form.telefono)?;
        let check_in_raw = required("check_in", form.check_in)?;
        let check_out_raw = required("check_out", form.check_out)?;

        let check_in = parse_date("check_in", &check_in_raw)?;
        let check_out = parse_date("check_out", &check_out_raw)?;
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err(BookingError::InvalidDateRange);
        }

        let guests = parse_guests(form.huespedes)?;
        let notes = form
            .notas
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let created_at = self.clock.now();
        let reference = reference_code(self.references.next_number(), created_at);
        let guest = GuestContact {
            first_name,
            last_name,
            email,
            phone,
        };
        let stay = Stay {
            check_in,
            check_out,
            nights,
            guests,
        };

        // Read the selection and write the reservation in one step so a
        // concurrent request on the same session cannot undo either.
        self.store
            .update(token, move |session| {
                let reservation = Reservation {
                    reference,
                    created_at,
                    guest,
                    stay,
                    room_id: session.selected_room.unwrap_or(DEFAULT_ROOM_ID),
                    total: REFERENCE_NIGHTLY_RATE * nights as f64,
                    notes,
                };
                session.last_reservation = Some(reservation.clone());
                session.selected_room = None;
                reservation
            })
            .await
            .map_err(BookingError::StorageFailure)?
            .ok_or(BookingError::UnknownSession)
    }
}

// Builds `RES-<5 digits>-<YYYYMM>` from a number in [10000, 99999].
pub fn reference_code(number: u32, at: DateTime<Utc>) -> String {
    format!("{REFERENCE_PREFIX}-{number:05}-{}", at.format("%Y%m"))
}

fn required(field: &'static str, value: Option<String>) -> Result<String, BookingError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(BookingError::MissingField(field)),
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        BookingError::UnparsableDate {
            field,
            value: value.to_string(),
        }
    })
}

fn parse_guests(value: Option<String>) -> Result<u32, BookingError> {
    let Some(raw) = value else {
        return Ok(1);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(1);
    }

    match trimmed.parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(BookingError::InvalidGuests(raw)),
    }
}
