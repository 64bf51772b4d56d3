use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::catalog;
use crate::interface_adapters::handlers::take_flashes;
use crate::interface_adapters::session::Visitor;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views;

pub async fn index(State(state): State<AppState>, visitor: Visitor) -> Response {
    let flashes = take_flashes(&state, &visitor).await;
    visitor.respond(views::home(&flashes))
}

pub async fn rooms(State(state): State<AppState>, visitor: Visitor) -> Response {
    let flashes = take_flashes(&state, &visitor).await;
    visitor.respond(views::rooms(&flashes))
}

pub async fn room_detail(
    State(state): State<AppState>,
    visitor: Visitor,
    Path(room_id): Path<String>,
) -> Response {
    let Some(room) = catalog::find_by_segment(&room_id) else {
        tracing::debug!(%room_id, "room not found");
        return visitor.respond(not_found().await);
    };

    let flashes = take_flashes(&state, &visitor).await;
    visitor.respond(views::room_detail(room, &flashes))
}

// Fallback for every unmatched route.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, views::not_found()).into_response()
}
