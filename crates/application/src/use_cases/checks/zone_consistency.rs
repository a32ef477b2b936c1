use super::exchange::{ask, render_set, ZONE_CONSISTENCY_TIMEOUT};
use super::Checker;
use crate::ports::DnsExchange;
use async_trait::async_trait;
use dnsmon_domain::{
    CheckResult, DnsName, DnsQuery, DomainError, RecordType, ServerAddress,
    ZoneConsistencyConfig,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Asks every configured server for the SOA of a zone and requires all of
/// them to return the same record, byte for byte in presentation form.
pub struct ZoneConsistencyChecker {
    domain: DnsName,
    servers: Vec<ServerAddress>,
    exchange: Arc<dyn DnsExchange>,
}

impl ZoneConsistencyChecker {
    pub fn new(
        config: ZoneConsistencyConfig,
        exchange: Arc<dyn DnsExchange>,
    ) -> Result<Self, DomainError> {
        let mut servers: Vec<ServerAddress> = Vec::with_capacity(config.servers.len());
        for server in config.servers {
            if !servers.contains(&server) {
                servers.push(server);
            }
        }

        if servers.is_empty() {
            return Err(DomainError::ConfigError(format!(
                "zone consistency check for {} has no servers",
                config.domain
            )));
        }

        Ok(Self {
            domain: config.domain,
            servers,
            exchange,
        })
    }

    pub fn servers(&self) -> &[ServerAddress] {
        &self.servers
    }
}

#[async_trait]
impl Checker for ZoneConsistencyChecker {
    fn describe(&self) -> String {
        format!("dnssoa {} @ {}", self.domain, render_set(&self.servers))
    }

    #[instrument(skip(self), fields(domain = %self.domain, servers = self.servers.len()))]
    async fn perform(&self) -> CheckResult {
        let mut harvest: BTreeSet<String> = BTreeSet::new();

        // The first failing server ends the check; later servers are not asked.
        for server in &self.servers {
            let query = DnsQuery::authoritative(self.domain.clone(), RecordType::SOA);
            let reply =
                match ask(self.exchange.as_ref(), server, &query, ZONE_CONSISTENCY_TIMEOUT).await {
                    Ok(reply) => reply,
                    Err(result) => return result,
                };

            let mut matches = 0usize;
            for record in reply.answers_for(&self.domain, RecordType::SOA) {
                harvest.insert(record.rendering().to_string());
                matches += 1;
            }

            if matches == 0 {
                warn!(server = %server, "No SOA in answer");
                return CheckResult::unhealthy(format!(
                    "DNS server {} did not return a SOA for {}",
                    server, self.domain
                ));
            }

            debug!(server = %server, matches, "SOA harvested");
        }

        if harvest.len() != 1 {
            return CheckResult::unhealthy(format!(
                "Had different SOA records for {}: {}",
                self.domain,
                render_set(&harvest)
            ));
        }

        CheckResult::Healthy
    }
}
