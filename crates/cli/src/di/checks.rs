use anyhow::Context;
use dnsmon_application::ports::{Clock, DnsExchange};
use dnsmon_application::use_cases::{build_checker, Checker};
use dnsmon_domain::Config;
use dnsmon_infrastructure::dns::UdpDnsExchange;
use dnsmon_infrastructure::system::SystemClock;
use std::sync::Arc;
use tracing::debug;

pub struct Checks {
    pub checkers: Vec<Arc<dyn Checker>>,
}

impl Checks {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let exchange: Arc<dyn DnsExchange> = Arc::new(UdpDnsExchange::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let mut checkers = Vec::with_capacity(config.checks.len());
        for (index, check) in config.checks.iter().enumerate() {
            let checker = build_checker(check, exchange.clone(), clock.clone())
                .with_context(|| format!("checks[{}] ({})", index, check.kind()))?;
            debug!(index, check = %checker.describe(), "Checker built");
            checkers.push(checker);
        }

        Ok(Self { checkers })
    }
}
