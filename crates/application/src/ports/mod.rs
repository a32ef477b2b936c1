mod clock;
mod dns_exchange;

pub use clock::Clock;
pub use dns_exchange::{DnsExchange, ExchangeOutcome};

// Re-export for convenience
pub use dnsmon_domain::{DnsQuery, DnsReply};
