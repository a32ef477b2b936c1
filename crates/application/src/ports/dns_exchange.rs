use async_trait::async_trait;
use dnsmon_domain::{DnsQuery, DnsReply, DomainError, ServerAddress};
use std::time::Duration;

/// Result of one query/response exchange.
///
/// `Timeout` is kept apart from `Failed` so checks can report the two
/// differently; `Failed` also covers replies that could not be decoded.
#[derive(Debug, Clone)]
pub enum ExchangeOutcome {
    Reply(DnsReply),
    Timeout,
    Failed(DomainError),
}

/// Port for sending one query to one server and waiting for its reply.
///
/// Implementations own the socket for the duration of the call and must
/// release it before returning, whatever the outcome. No retries.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        server: &ServerAddress,
        query: &DnsQuery,
        timeout: Duration,
    ) -> ExchangeOutcome;
}
