//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One ephemeral socket per query, connected to the server so the kernel
//! drops datagrams from any other source. Replies whose ID does not match
//! the query are discarded and the wait continues until the deadline.

use super::TransportOutcome;
use dnsmon_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Receive buffer; large enough for any UDP datagram, whatever payload size the server honours.
const MAX_UDP_RESPONSE_SIZE: usize = 65535;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Send `message_bytes` and wait for the matching reply.
    ///
    /// `timeout` bounds the whole exchange, send and every receive included.
    pub async fn send(&self, message_bytes: &[u8], timeout: Duration) -> TransportOutcome {
        let deadline = Instant::now() + timeout;

        let socket = match self.connect().await {
            Ok(socket) => socket,
            Err(e) => return TransportOutcome::Error(e),
        };

        match timeout_at(deadline, socket.send(message_bytes)).await {
            Err(_) => return TransportOutcome::Timeout,
            Ok(Err(e)) => {
                return TransportOutcome::Error(DomainError::IoError(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                )))
            }
            Ok(Ok(bytes_sent)) => {
                debug!(server = %self.server_addr, bytes_sent, "UDP query sent");
            }
        }

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = match timeout_at(deadline, socket.recv(&mut recv_buf)).await {
                Err(_) => return TransportOutcome::Timeout,
                Ok(Err(e)) => {
                    return TransportOutcome::Error(DomainError::IoError(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    )))
                }
                Ok(Ok(n)) => n,
            };

            let response = &recv_buf[..bytes_received];
            match validate_response_id(message_bytes, response, self.server_addr) {
                Ok(()) => {
                    debug!(server = %self.server_addr, bytes_received, "UDP response received");
                    return TransportOutcome::Datagram(response.to_vec());
                }
                Err(e) => {
                    warn!(server = %self.server_addr, error = %e, "Discarding UDP datagram");
                }
            }
        }
    }

    async fn connect(&self) -> Result<UdpSocket, DomainError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        socket.connect(self.server_addr).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to connect UDP socket to {}: {}",
                self.server_addr, e
            ))
        })?;

        Ok(socket)
    }
}

/// Checks that `response` carries the ID of `query`.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "DNS message from {} too short to carry an ID",
            server
        )));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if query_id != response_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "DNS ID mismatch from {}: expected {:#06x}, got {:#06x}",
            server, query_id, response_id
        )));
    }

    Ok(())
}
