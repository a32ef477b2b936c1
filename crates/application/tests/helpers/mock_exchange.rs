#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dnsmon_application::ports::{Clock, DnsExchange, ExchangeOutcome};
use dnsmon_domain::{DnsQuery, DnsReply, DomainError, ServerAddress};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub server: ServerAddress,
    pub query: DnsQuery,
    pub timeout: Duration,
}

/// Scripted exchange: each server answers with its queued outcomes in order,
/// then times out once the queue is drained.
#[derive(Clone, Default)]
pub struct MockDnsExchange {
    outcomes: Arc<Mutex<HashMap<ServerAddress, VecDeque<ExchangeOutcome>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockDnsExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, server: ServerAddress, outcome: ExchangeOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .entry(server)
            .or_default()
            .push_back(outcome);
    }

    pub fn reply(&self, server: ServerAddress, reply: DnsReply) {
        self.push(server, ExchangeOutcome::Reply(reply));
    }

    pub fn timeout(&self, server: ServerAddress) {
        self.push(server, ExchangeOutcome::Timeout);
    }

    pub fn fail(&self, server: ServerAddress, error: DomainError) {
        self.push(server, ExchangeOutcome::Failed(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_servers(&self) -> Vec<ServerAddress> {
        self.calls().into_iter().map(|c| c.server).collect()
    }
}

#[async_trait]
impl DnsExchange for MockDnsExchange {
    async fn exchange(
        &self,
        server: &ServerAddress,
        query: &DnsQuery,
        timeout: Duration,
    ) -> ExchangeOutcome {
        self.calls.lock().unwrap().push(RecordedCall {
            server: *server,
            query: query.clone(),
            timeout,
        });

        self.outcomes
            .lock()
            .unwrap()
            .get_mut(server)
            .and_then(VecDeque::pop_front)
            .unwrap_or(ExchangeOutcome::Timeout)
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(rfc3339: &str) -> Self {
        Self(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
