pub mod account;
pub mod api;
pub mod booking;
pub mod pages;

use crate::domain::entities::Flash;
use crate::interface_adapters::session::Visitor;
use crate::interface_adapters::state::AppState;
use crate::use_cases::flash::FlashUseCase;

// Drain pending flashes for rendering; a storage error only loses the messages.
async fn take_flashes(state: &AppState, visitor: &Visitor) -> Vec<Flash> {
    let use_case = FlashUseCase {
        store: state.session_store(),
    };
    use_case.take(&visitor.token).await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to drain flashes");
        Vec::new()
    })
}

async fn push_flash(state: &AppState, visitor: &Visitor, flash: Flash) {
    let use_case = FlashUseCase {
        store: state.session_store(),
    };
    if let Err(err) = use_case.push(&visitor.token, flash).await {
        tracing::warn!(error = %err, "failed to queue flash");
    }
}
