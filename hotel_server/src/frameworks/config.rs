use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::{env, time::Duration};

use crate::interface_adapters::state::DEFAULT_STATIC_DIR;

// Runtime/server settings read from the environment.

pub const DEFAULT_SESSION_TTL_SECONDS: u64 = 60 * 60;
pub const DEFAULT_LOG_FILTER: &str = "hotel_server=info,tower_http=info";

// Output shape for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

pub fn log_format() -> LogFormat {
    env::var("LOG_FORMAT")
        .map(|value| LogFormat::parse(&value))
        .unwrap_or(LogFormat::Compact)
}

pub fn http_port() -> u16 {
    env::var("HOTEL_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000)
}

// Listen address; loopback unless HOTEL_SERVER_HOST says otherwise.
pub fn bind_address() -> SocketAddr {
    let host = env::var("HOTEL_SERVER_HOST")
        .ok()
        .and_then(|value| value.parse::<IpAddr>().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
    SocketAddr::new(host, http_port())
}

pub fn static_dir() -> PathBuf {
    env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR))
}

pub fn session_ttl_seconds() -> u64 {
    env::var("SESSION_TTL_SECONDS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SESSION_TTL_SECONDS)
}

pub fn session_sweep_interval() -> Duration {
    let secs = env::var("SESSION_SWEEP_INTERVAL_SECONDS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(300);
    // tokio intervals reject a zero period.
    Duration::from_secs(secs.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_log_format_is_json_in_any_case_then_json_is_chosen() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    }

    #[test]
    fn when_log_format_is_unrecognized_then_compact_is_chosen() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Compact);
        assert_eq!(LogFormat::parse(""), LogFormat::Compact);
    }
}
