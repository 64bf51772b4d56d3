use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::domain::entities::VisitorSession;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::interface_adapters::views;
use crate::use_cases::open_session::OpenSessionUseCase;

pub const SESSION_COOKIE: &str = "hotel_session";

// Visitor resolved from the session cookie. Extracting it opens (or creates)
// the server-side session, so every handler sees a live session.
pub struct Visitor {
    pub token: String,
    pub session: VisitorSession,
    pub fresh: bool,
}

impl Visitor {
    // Attach the session cookie to an outgoing response.
    pub fn respond(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();
        if let Ok(value) = HeaderValue::from_str(&session_cookie(&self.token)) {
            response.headers_mut().append(SET_COOKIE, value);
        }
        response
    }

    // Short token prefix for log fields.
    pub fn tag(&self) -> &str {
        self.token.get(..8).unwrap_or(&self.token)
    }
}

impl FromRequestParts<AppState> for Visitor {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let use_case = OpenSessionUseCase {
            clock: SystemClock,
            store: state.session_store(),
            ttl_seconds: state.session_ttl_seconds,
        };

        let opened = use_case
            .execute(token_from_headers(&parts.headers))
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to open visitor session");
                (StatusCode::BAD_GATEWAY, views::server_error()).into_response()
            })?;

        if opened.fresh {
            tracing::debug!("visitor session created");
        }

        Ok(Visitor {
            token: opened.token,
            session: opened.session,
            fresh: opened.fresh,
        })
    }
}

pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
