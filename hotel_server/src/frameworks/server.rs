// Framework bootstrap for the hotel site.

use crate::domain::ports::Clock;
use crate::frameworks::config::{self, LogFormat};
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::{AppState, InMemorySessionStore, SystemClock};

use std::io::Result;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

// Route panics through tracing so they land in the same log stream.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;

    // Shared, in-memory store for visitor sessions.
    let state =
        AppState::new(config::session_ttl_seconds()).with_static_dir(config::static_dir());
    spawn_session_sweeper(state.session_store(), config::session_sweep_interval());
    tracing::debug!(
        session_ttl_seconds = state.session_ttl_seconds,
        static_dir = %state.static_dir.display(),
        "site state configured"
    );

    let app = app(state).layer(TraceLayer::new_for_http());

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    let format = config::log_format();
    init_tracing(format);
    install_panic_hook();

    let address = config::bind_address();
    tracing::debug!(%address, ?format, "hotel server starting");

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

// Periodically drop expired visitor sessions.
fn spawn_session_sweeper(store: InMemorySessionStore, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = store.purge_expired(SystemClock.now_epoch_seconds()).await;
            if removed > 0 {
                tracing::debug!(removed, "expired sessions purged");
            }
        }
    });
}
