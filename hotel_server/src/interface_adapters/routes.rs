use crate::interface_adapters::handlers::account::{login, logout, register};
use crate::interface_adapters::handlers::api::select_room;
use crate::interface_adapters::handlers::booking::{
    booking_form, choose_room, confirmation, process_booking,
};
use crate::interface_adapters::handlers::pages::{index, not_found, room_detail, rooms};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/habitaciones", get(rooms))
        .route("/habitaciones/{id}", get(room_detail))
        .route("/habitaciones/{id}/reservar", get(choose_room))
        .route("/reservas", get(booking_form))
        .route("/reservas/procesar", post(process_booking))
        .route("/reservas/confirmacion", get(confirmation))
        .route("/api/select-room/{id}", get(select_room))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/logout", get(logout))
        .nest_service("/static", assets)
        .fallback(not_found)
        .with_state(state)
}
