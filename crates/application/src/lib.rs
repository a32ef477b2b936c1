//! dnsmon application layer: ports and the check use cases.
pub mod ports;
pub mod use_cases;
