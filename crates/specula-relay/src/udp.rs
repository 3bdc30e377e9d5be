//! UDP relay implementation.

use super::{RelayConfig, RelayError, Result};
use crate::inspect;
use bytes::Bytes;
use socket2::{Domain, Socket, Type};
use specula_proto::MAX_DATAGRAM_SIZE;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, error, info};

/// UDP DNS relay.
///
/// Listens on a single socket and forwards every datagram verbatim to
/// the configured upstream, relaying the raw reply back to the sender.
pub struct UdpRelay {
    socket: Arc<UdpSocket>,
    config: RelayConfig,
    local_addr: SocketAddr,
}

impl UdpRelay {
    /// Binds a new UDP relay to the configured listen address.
    pub async fn bind(config: RelayConfig) -> Result<Self> {
        // Create socket with socket2 for more control
        let domain = if config.listen.is_ipv4() {
            Domain::IPV4
        } else {
            Domain::IPV6
        };

        let socket = Socket::new(domain, Type::DGRAM, None)?;

        // Set socket options
        socket.set_reuse_address(true)?;
        socket.set_nonblocking(true)?;

        // Bind
        socket.bind(&config.listen.into())?;

        // Convert to tokio socket
        let std_socket: std::net::UdpSocket = socket.into();
        let socket = UdpSocket::from_std(std_socket)?;
        let local_addr = socket.local_addr()?;

        info!(addr = %local_addr, upstream = %config.upstream, "UDP relay listening");

        Ok(Self {
            socket: Arc::new(socket),
            config,
            local_addr,
        })
    }

    /// Returns the local address.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Runs the relay receive loop.
    ///
    /// Each datagram gets two independent tasks: one forwarding the raw
    /// bytes upstream and relaying the reply, and one decoding the
    /// payload for diagnostics. Neither can disturb the other, and a
    /// failure in either is logged and dropped.
    pub async fn run(&self) -> Result<()> {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];

        loop {
            match self.socket.recv_from(&mut buf).await {
                Ok((len, src)) => {
                    let data = Bytes::copy_from_slice(&buf[..len]);
                    let socket = self.socket.clone();
                    let upstream = self.config.upstream;
                    let deadline = self.config.upstream_timeout;

                    // Diagnostic decode, decoupled from the relay path
                    inspect::spawn(data.clone());

                    tokio::spawn(async move {
                        if let Err(e) = forward(socket, upstream, deadline, data, src).await {
                            debug!(error = %e, client = %src, "Error relaying query");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Error receiving UDP packet");
                }
            }
        }
    }
}

/// Forwards one raw datagram to the upstream and relays the reply back.
///
/// Uses a fresh outbound socket per query so upstream replies can never
/// be confused between concurrent clients.
async fn forward(
    socket: Arc<UdpSocket>,
    upstream: SocketAddr,
    deadline: Duration,
    data: Bytes,
    src: SocketAddr,
) -> Result<()> {
    let bind_addr: SocketAddr = if upstream.is_ipv4() {
        ([0, 0, 0, 0], 0).into()
    } else {
        ([0u16; 8], 0).into()
    };

    let outbound = UdpSocket::bind(bind_addr).await?;
    outbound.connect(upstream).await?;
    outbound.send(&data).await?;

    let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
    let len = timeout(deadline, outbound.recv(&mut buf))
        .await
        .map_err(|_| RelayError::UpstreamTimeout(deadline))??;

    // Relay the raw reply unmodified to the original sender
    socket.send_to(&buf[..len], src).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> RelayConfig {
        RelayConfig {
            listen: "127.0.0.1:0".parse().unwrap(),
            upstream: "127.0.0.1:1".parse().unwrap(),
            upstream_timeout: Duration::from_millis(200),
        }
    }

    #[tokio::test]
    async fn test_relay_bind() {
        let relay = UdpRelay::bind(test_config()).await.unwrap();
        assert!(relay.local_addr().port() > 0);
    }

    #[tokio::test]
    async fn test_forward_times_out() {
        // An upstream that never answers produces UpstreamTimeout
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let upstream = silent.local_addr().unwrap();

        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let deadline = Duration::from_millis(50);
        let result = forward(
            socket,
            upstream,
            deadline,
            Bytes::from_static(b"\x12\x34"),
            "127.0.0.1:9".parse().unwrap(),
        )
        .await;

        assert!(matches!(result, Err(RelayError::UpstreamTimeout(_))));
    }
}
