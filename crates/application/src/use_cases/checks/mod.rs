mod answer_match;
mod exchange;
mod signature_freshness;
mod zone_consistency;

pub use answer_match::AnswerMatchChecker;
pub use exchange::{ANSWER_MATCH_TIMEOUT, SIGNATURE_TIMEOUT, ZONE_CONSISTENCY_TIMEOUT};
pub use signature_freshness::SignatureFreshnessChecker;
pub use zone_consistency::ZoneConsistencyChecker;

use crate::ports::{Clock, DnsExchange};
use async_trait::async_trait;
use dnsmon_domain::{CheckConfig, CheckResult, DomainError};
use std::sync::Arc;

/// A health check that can be performed any number of times.
///
/// Implementations are immutable after construction; `perform` never fails,
/// every problem is reported through the returned [`CheckResult`].
#[async_trait]
pub trait Checker: Send + Sync {
    /// Short identification used in reports, e.g. `dns example.com.|NS @ 1.1.1.1:53`.
    fn describe(&self) -> String;

    async fn perform(&self) -> CheckResult;
}

/// Builds the checker configured by one `[[checks]]` table.
pub fn build_checker(
    config: &CheckConfig,
    exchange: Arc<dyn DnsExchange>,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn Checker>, DomainError> {
    let checker: Arc<dyn Checker> = match config {
        CheckConfig::AnswerMatch(cfg) => Arc::new(AnswerMatchChecker::new(cfg.clone(), exchange)?),
        CheckConfig::ZoneConsistency(cfg) => {
            Arc::new(ZoneConsistencyChecker::new(cfg.clone(), exchange)?)
        }
        CheckConfig::SignatureFreshness(cfg) => {
            Arc::new(SignatureFreshnessChecker::new(cfg.clone(), exchange, clock))
        }
    };
    Ok(checker)
}
