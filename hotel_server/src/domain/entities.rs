use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Category tag attached to every catalog room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomCategory {
    Estandar,
    Deluxe,
    Suite,
    Familiar,
}

impl RoomCategory {
    pub fn label(self) -> &'static str {
        match self {
            RoomCategory::Estandar => "Estándar",
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Suite => "Suite",
            RoomCategory::Familiar => "Familiar",
        }
    }
}

// Immutable room definition served from the static catalog.
#[derive(Debug)]
pub struct Room {
    pub id: u32,
    pub name: &'static str,
    pub category: RoomCategory,
    pub price: f64,
    pub capacity: u32,
    pub description: &'static str,
    pub size: &'static str,
    pub beds: &'static str,
    pub amenities: &'static [&'static str],
    pub images: &'static [&'static str],
}

// Guest contact block copied verbatim from the booking form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuestContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guests: u32,
}

// Synthetic reservation kept only in the visitor session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub guest: GuestContact,
    pub stay: Stay,
    pub room_id: u32,
    pub total: f64,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

impl FlashKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "flash-success",
            FlashKind::Error => "flash-error",
            FlashKind::Info => "flash-info",
        }
    }
}

// One-shot message shown on the next rendered page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }
}

// Per-visitor session record stored in memory, keyed by the cookie token.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VisitorSession {
    pub selected_room: Option<u32>,
    pub last_reservation: Option<Reservation>,
    pub flashes: Vec<Flash>,
    pub expires_at: u64,
}

impl VisitorSession {
    pub fn new(expires_at: u64) -> Self {
        Self {
            expires_at,
            ..Self::default()
        }
    }

    pub fn is_live(&self, now: u64) -> bool {
        self.expires_at > now
    }
}
