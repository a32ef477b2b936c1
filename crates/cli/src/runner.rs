use dnsmon_application::use_cases::Checker;
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Outcome of one checker, as printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub check: String,
    pub healthy: bool,
    pub message: String,
}

impl CheckReport {
    pub fn render_line(&self) -> String {
        if self.healthy {
            format!("OK {}", self.check)
        } else {
            format!("FAIL {}: {}", self.check, self.message)
        }
    }
}

/// Performs every check concurrently; reports keep the input order.
pub async fn run_all(checkers: &[Arc<dyn Checker>]) -> Vec<CheckReport> {
    join_all(checkers.iter().map(|checker| async move {
        let check = checker.describe();
        let result = checker.perform().await;
        if !result.is_healthy() {
            warn!(check = %check, message = %result.message(), "Check failed");
        }
        CheckReport {
            check,
            healthy: result.is_healthy(),
            message: result.message().to_string(),
        }
    }))
    .await
}
