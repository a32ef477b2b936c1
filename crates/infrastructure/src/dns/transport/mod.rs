pub mod udp;

use dnsmon_domain::DomainError;

pub use udp::UdpTransport;

/// Result of one datagram round trip.
///
/// A timeout is kept apart from errors because checks report the two
/// differently.
#[derive(Debug)]
pub enum TransportOutcome {
    Datagram(Vec<u8>),
    Timeout,
    Error(DomainError),
}
