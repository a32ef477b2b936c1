use crate::ports::{DnsExchange, ExchangeOutcome};
use dnsmon_domain::{CheckResult, DnsQuery, DnsReply, ServerAddress};
use std::fmt::Display;
use std::time::Duration;
use tracing::debug;

pub const ANSWER_MATCH_TIMEOUT: Duration = Duration::from_millis(500);
pub const ZONE_CONSISTENCY_TIMEOUT: Duration = Duration::from_millis(500);
pub const SIGNATURE_TIMEOUT: Duration = Duration::from_secs(1);

/// Runs one exchange and turns every non-NOERROR outcome into the
/// diagnostic the calling check returns as-is.
pub(super) async fn ask(
    exchange: &dyn DnsExchange,
    server: &ServerAddress,
    query: &DnsQuery,
    timeout: Duration,
) -> Result<DnsReply, CheckResult> {
    debug!(
        server = %server,
        name = %query.name,
        record_type = %query.record_type,
        rd = query.recursion_desired,
        dnssec_ok = query.dnssec_ok,
        "Sending DNS probe"
    );

    match exchange.exchange(server, query, timeout).await {
        ExchangeOutcome::Timeout => Err(CheckResult::unhealthy(format!(
            "Timeout asking DNS question for {}|{} to {}",
            query.name, query.record_type, server
        ))),
        ExchangeOutcome::Failed(e) => Err(CheckResult::unhealthy(format!(
            "Error asking DNS question for {}|{} to {}: {}",
            query.name, query.record_type, server, e
        ))),
        ExchangeOutcome::Reply(reply) if !reply.rcode.is_no_error() => {
            Err(CheckResult::unhealthy(format!(
                "Got DNS response with RCode {} from {} for question {}|{}",
                reply.rcode, server, query.name, query.record_type
            )))
        }
        ExchangeOutcome::Reply(reply) => {
            debug!(
                server = %server,
                id = reply.id,
                records = reply.records.len(),
                truncated = reply.truncated,
                "DNS probe answered"
            );
            Ok(reply)
        }
    }
}

/// Renders a set as `{"a", "b"}`.
pub(super) fn render_set<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let quoted: Vec<String> = items.into_iter().map(|i| format!("\"{}\"", i)).collect();
    format!("{{{}}}", quoted.join(", "))
}
