use super::exchange::{ask, SIGNATURE_TIMEOUT};
use super::Checker;
use crate::ports::{Clock, DnsExchange};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dnsmon_domain::{
    CheckResult, DnsName, DnsQuery, RecordType, ServerAddress, SignatureFreshnessConfig,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

const WINDOW_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Requires at least one RRSIG over the name's SOA to be active, and none to
/// expire within `min_days`.
///
/// Signatures that are not yet active are expected around key rollovers and
/// only logged. The first signature inside the expiry margin fails the check
/// immediately, even if an active one was already seen.
pub struct SignatureFreshnessChecker {
    server: ServerAddress,
    name: DnsName,
    min_days: u32,
    exchange: Arc<dyn DnsExchange>,
    clock: Arc<dyn Clock>,
}

impl SignatureFreshnessChecker {
    pub fn new(
        config: SignatureFreshnessConfig,
        exchange: Arc<dyn DnsExchange>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            server: config.server,
            name: config.name,
            min_days: config.min_days,
            exchange,
            clock,
        }
    }

    pub fn min_days(&self) -> u32 {
        self.min_days
    }
}

fn window_bound(ts: &DateTime<Utc>) -> String {
    ts.format(WINDOW_FORMAT).to_string()
}

#[async_trait]
impl Checker for SignatureFreshnessChecker {
    fn describe(&self) -> String {
        format!("rrsig {} @ {}", self.name, self.server)
    }

    #[instrument(skip(self), fields(name = %self.name, server = %self.server, min_days = self.min_days))]
    async fn perform(&self) -> CheckResult {
        let query = DnsQuery::authoritative(self.name.clone(), RecordType::SOA).with_dnssec_ok();
        let reply = match ask(self.exchange.as_ref(), &self.server, &query, SIGNATURE_TIMEOUT).await
        {
            Ok(reply) => reply,
            Err(result) => return result,
        };

        let now = self.clock.now();
        let margin = Duration::days(i64::from(self.min_days));
        let mut valid = false;

        for record in reply.answers_for(&self.name, RecordType::RRSIG) {
            let Some(window) = record.as_rrsig() else {
                continue;
            };
            let from = window_bound(&window.inception);
            let to = window_bound(&window.expiration);

            debug!(key_tag = window.key_tag, %from, %to, "RRSIG found");

            if window.expires_within(now, margin) {
                return CheckResult::unhealthy(format!(
                    "Got RRSIG that expires in {:.0} days for {} from {}, valid from {} to {} UTC",
                    window.days_until_expiry(now),
                    self.name,
                    self.server,
                    from,
                    to
                ));
            } else if window.is_pending(now) {
                info!(
                    key_tag = window.key_tag,
                    "Got RRSIG that is not yet active for {} from {}, valid from {} to {} UTC",
                    self.name,
                    self.server,
                    from,
                    to
                );
            } else {
                valid = true;
            }
        }

        if !valid {
            return CheckResult::unhealthy(format!(
                "Did not find an active RRSIG for {} over at server {}",
                self.name, self.server
            ));
        }

        CheckResult::Healthy
    }
}
