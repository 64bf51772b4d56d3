use thiserror::Error;

// Domain-level errors for the booking and room-selection workflows.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not a YYYY-MM-DD date: {value:?}")]
    UnparsableDate { field: &'static str, value: String },
    #[error("check-out must follow check-in")]
    InvalidDateRange,
    #[error("guest count {0:?} is not a positive integer")]
    InvalidGuests(String),
    #[error("room {0} is not in the catalog")]
    UnknownRoom(u32),
    #[error("visitor session not found")]
    UnknownSession,
    #[error("session storage failure: {0}")]
    StorageFailure(String),
}
