use super::exchange::{ask, render_set, ANSWER_MATCH_TIMEOUT};
use super::Checker;
use crate::ports::DnsExchange;
use async_trait::async_trait;
use dnsmon_domain::{
    AnswerMatchConfig, CheckResult, DnsName, DnsQuery, DomainError, RecordType, ResourceRecord,
    ServerAddress,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Asks one server one question and requires every answer of the queried
/// type to be in the acceptable set.
///
/// NS answers are compared by target name, so `ns1.example.com` and
/// `NS1.example.com.` are the same entry. Every other type is compared by
/// the exact presentation string of its RDATA.
pub struct AnswerMatchChecker {
    server: ServerAddress,
    name: DnsName,
    record_type: RecordType,
    acceptable: BTreeSet<String>,
    acceptable_names: BTreeSet<DnsName>,
    exchange: Arc<dyn DnsExchange>,
}

impl AnswerMatchChecker {
    pub fn new(
        config: AnswerMatchConfig,
        exchange: Arc<dyn DnsExchange>,
    ) -> Result<Self, DomainError> {
        let acceptable: BTreeSet<String> = config.acceptable.into_iter().collect();

        let acceptable_names = if config.record_type == RecordType::NS {
            acceptable
                .iter()
                .map(|entry| DnsName::parse(entry))
                .collect::<Result<BTreeSet<_>, _>>()?
        } else {
            BTreeSet::new()
        };

        Ok(Self {
            server: config.server,
            name: config.name,
            record_type: config.record_type,
            acceptable,
            acceptable_names,
            exchange,
        })
    }

    fn is_acceptable(&self, record: &ResourceRecord) -> bool {
        if self.record_type == RecordType::NS {
            record
                .as_ns()
                .is_some_and(|target| self.acceptable_names.contains(target))
        } else {
            self.acceptable.contains(record.rendering())
        }
    }
}

#[async_trait]
impl Checker for AnswerMatchChecker {
    fn describe(&self) -> String {
        format!("dns {}|{} @ {}", self.name, self.record_type, self.server)
    }

    #[instrument(skip(self), fields(name = %self.name, record_type = %self.record_type, server = %self.server))]
    async fn perform(&self) -> CheckResult {
        let query = DnsQuery::recursive(self.name.clone(), self.record_type);
        let reply =
            match ask(self.exchange.as_ref(), &self.server, &query, ANSWER_MATCH_TIMEOUT).await {
                Ok(reply) => reply,
                Err(result) => return result,
            };

        let mut matches = 0usize;
        for record in reply
            .answers()
            .filter(|r| r.record_type == self.record_type)
        {
            if !self.is_acceptable(record) {
                warn!(answer = %record.rendering(), "Unacceptable DNS answer");
                return CheckResult::unhealthy(format!(
                    "Unacceptable DNS answer {} for question {} from {}. Acceptable: {}",
                    record.rendering(),
                    self.name,
                    self.server,
                    render_set(&self.acceptable)
                ));
            }
            matches += 1;
        }

        if matches == 0 {
            return CheckResult::unhealthy(format!(
                "No matching answer to question {}|{} to {} was received",
                self.name, self.record_type, self.server
            ));
        }

        debug!(matches, "All answers acceptable");
        CheckResult::Healthy
    }
}
