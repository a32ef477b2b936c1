use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{TransportOutcome, UdpTransport};
use async_trait::async_trait;
use dnsmon_application::ports::{DnsExchange, ExchangeOutcome};
use dnsmon_domain::{DnsQuery, DnsReply, DomainError, ServerAddress};
use std::time::Duration;
use tracing::{debug, warn};

/// [`DnsExchange`] over plain UDP, one socket per query.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpDnsExchange;

impl UdpDnsExchange {
    pub fn new() -> Self {
        Self
    }

    /// Rejects replies whose question section does not echo the query.
    ///
    /// A reply without a question section is accepted; some servers strip
    /// it from error responses.
    fn check_question(query: &DnsQuery, reply: &DnsReply) -> Result<(), DomainError> {
        let Some(question) = &reply.question else {
            return Ok(());
        };

        if question.name != query.name || question.record_type != Some(query.record_type) {
            return Err(DomainError::InvalidDnsResponse(format!(
                "reply answers {}|{} instead of {}|{}",
                question.name,
                question
                    .record_type
                    .map_or_else(|| "?".to_string(), |t| t.to_string()),
                query.name,
                query.record_type
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl DnsExchange for UdpDnsExchange {
    async fn exchange(
        &self,
        server: &ServerAddress,
        query: &DnsQuery,
        timeout: Duration,
    ) -> ExchangeOutcome {
        let (id, bytes) = match MessageBuilder::build_query(query) {
            Ok(built) => built,
            Err(e) => return ExchangeOutcome::Failed(e),
        };

        debug!(server = %server, id, bytes = bytes.len(), "Query encoded");

        let transport = UdpTransport::new(server.socket_addr());
        let datagram = match transport.send(&bytes, timeout).await {
            TransportOutcome::Datagram(datagram) => datagram,
            TransportOutcome::Timeout => return ExchangeOutcome::Timeout,
            TransportOutcome::Error(e) => return ExchangeOutcome::Failed(e),
        };

        let reply = match ResponseParser::parse(&datagram) {
            Ok(reply) => reply,
            Err(e) => return ExchangeOutcome::Failed(e),
        };

        if let Err(e) = Self::check_question(query, &reply) {
            warn!(server = %server, error = %e, "Reply question mismatch");
            return ExchangeOutcome::Failed(e);
        }

        ExchangeOutcome::Reply(reply)
    }
}
