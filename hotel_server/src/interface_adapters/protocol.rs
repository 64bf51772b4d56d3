use serde::{Deserialize, Serialize};

// Form payload posted by the booking page. Every field is optional so that
// presence is checked by the booking use case rather than the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub huespedes: Option<String>,
    pub notas: Option<String>,
}

// Response payload for the room selection API.
#[derive(Debug, Serialize)]
pub struct SelectRoomResponse {
    pub success: bool,
    pub message: String,
}
