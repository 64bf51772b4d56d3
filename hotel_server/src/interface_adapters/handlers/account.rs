use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Redirect, Response};

use crate::interface_adapters::handlers::take_flashes;
use crate::interface_adapters::session::{expired_session_cookie, Visitor};
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views;
use crate::use_cases::logout::LogoutUseCase;

// Placeholder login page; there is no account backend.
pub async fn login(State(state): State<AppState>, visitor: Visitor) -> Response {
    let flashes = take_flashes(&state, &visitor).await;
    visitor.respond(views::login(&flashes))
}

pub async fn register(State(state): State<AppState>, visitor: Visitor) -> Response {
    let flashes = take_flashes(&state, &visitor).await;
    visitor.respond(views::register(&flashes))
}

// Drops the whole visitor session and expires the cookie.
#[tracing::instrument(name = "logout", skip_all, fields(session = %visitor.tag()))]
pub async fn logout(State(state): State<AppState>, visitor: Visitor) -> Response {
    let use_case = LogoutUseCase {
        store: state.session_store(),
    };

    match use_case.execute(&visitor.token).await {
        Ok(result) => tracing::info!(revoked = result.revoked, "visitor logged out"),
        Err(err) => tracing::error!(error = %err, "failed to clear visitor session"),
    }

    let mut response = Redirect::to("/").into_response();
    if let Ok(value) = HeaderValue::from_str(&expired_session_cookie()) {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}
