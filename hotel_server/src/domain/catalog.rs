use crate::domain::entities::{Room, RoomCategory};

// Room recorded on a reservation when the visitor never selected one.
pub const DEFAULT_ROOM_ID: u32 = 1;

// Nightly rate used for every reservation total, whatever room is booked.
// Matches the price of room 1.
pub const REFERENCE_NIGHTLY_RATE: f64 = 250.0;

pub static ROOMS: [Room; 4] = [
    Room {
        id: 1,
        name: "Suite Deluxe Vista al Mar",
        category: RoomCategory::Deluxe,
        price: 250.0,
        capacity: 2,
        description: "Amplia suite con balcón privado y vista panorámica al océano.",
        size: "45 m²",
        beds: "1 cama King Size",
        amenities: &[
            "Wi-Fi gratuito",
            "Aire acondicionado",
            "Minibar",
            "Balcón privado",
            "Smart TV 55\"",
        ],
        images: &["/static/img/rooms/deluxe-1.svg", "/static/img/rooms/deluxe-2.svg"],
    },
    Room {
        id: 2,
        name: "Habitación Estándar",
        category: RoomCategory::Estandar,
        price: 120.0,
        capacity: 2,
        description: "Habitación cómoda y funcional, ideal para viajes de negocios.",
        size: "28 m²",
        beds: "2 camas individuales",
        amenities: &["Wi-Fi gratuito", "Aire acondicionado", "Escritorio de trabajo"],
        images: &["/static/img/rooms/standard-1.svg"],
    },
    Room {
        id: 3,
        name: "Habitación Familiar",
        category: RoomCategory::Familiar,
        price: 180.0,
        capacity: 4,
        description: "Espacio pensado para familias, con zona de estar independiente.",
        size: "40 m²",
        beds: "1 cama Queen + 2 camas individuales",
        amenities: &[
            "Wi-Fi gratuito",
            "Aire acondicionado",
            "Sofá cama",
            "Caja fuerte",
        ],
        images: &["/static/img/rooms/family-1.svg", "/static/img/rooms/family-2.svg"],
    },
    Room {
        id: 4,
        name: "Suite Presidencial",
        category: RoomCategory::Suite,
        price: 450.0,
        capacity: 4,
        description: "Nuestra suite más exclusiva, con jacuzzi y terraza privada.",
        size: "90 m²",
        beds: "1 cama King Size + sofá cama",
        amenities: &[
            "Wi-Fi gratuito",
            "Jacuzzi",
            "Terraza privada",
            "Servicio de mayordomo",
            "Minibar premium",
        ],
        images: &[
            "/static/img/rooms/presidential-1.svg",
            "/static/img/rooms/presidential-2.svg",
            "/static/img/rooms/presidential-3.svg",
        ],
    },
];

pub fn all() -> &'static [Room] {
    &ROOMS
}

pub fn find(id: u32) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

// Path segments that are not plain integers never name a room.
pub fn find_by_segment(segment: &str) -> Option<&'static Room> {
    segment.parse::<u32>().ok().and_then(find)
}
