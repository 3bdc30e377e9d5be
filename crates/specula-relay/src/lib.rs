//! # Specula Relay
//!
//! Transparent UDP DNS forwarding built on Tokio.
//!
//! The relay receives a datagram, forwards the raw bytes unmodified to a
//! fixed upstream resolver over a fresh outbound socket, and relays the
//! upstream's raw reply back to the original sender. Independently of
//! that path, every inbound payload is handed to the [`inspect`] module,
//! which decodes it on its own task purely for diagnostics — the decode
//! outcome never gates or delays the relay.
//!
//! Per-datagram failures (unreachable upstream, timeouts, malformed
//! payloads) are logged and dropped; nothing a single sender does can
//! take the receive loop down.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub mod inspect;
pub mod udp;

pub use udp::UdpRelay;

/// Relay error types.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Socket setup or I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream resolver did not answer within the deadline.
    #[error("upstream timed out after {0:?}")]
    UpstreamTimeout(Duration),
}

/// Result type for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Relay configuration.
///
/// There is no configuration file: a relay has exactly one listen
/// address and one upstream resolver, fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the UDP listener binds to.
    pub listen: SocketAddr,

    /// Upstream resolver all queries are forwarded to.
    pub upstream: SocketAddr,

    /// How long to wait for the upstream's reply to a single query.
    pub upstream_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], specula_proto::DNS_PORT)),
            upstream: SocketAddr::from(([1, 1, 1, 1], specula_proto::DNS_PORT)),
            upstream_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();
        assert_eq!(config.listen.port(), 53);
        assert_eq!(config.upstream.to_string(), "1.1.1.1:53");
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_error_display() {
        let err = RelayError::UpstreamTimeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "upstream timed out after 5s");
    }
}
