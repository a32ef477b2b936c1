use std::fmt;

/// Outcome of one check invocation.
///
/// There is no structured error code: the diagnostic text is the contract
/// with alerting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Healthy,
    Unhealthy(String),
}

impl CheckResult {
    pub fn unhealthy(message: impl Into<String>) -> Self {
        CheckResult::Unhealthy(message.into())
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, CheckResult::Healthy)
    }

    /// Diagnostic message; empty when healthy.
    pub fn message(&self) -> &str {
        match self {
            CheckResult::Healthy => "",
            CheckResult::Unhealthy(message) => message,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Healthy => f.write_str("healthy"),
            CheckResult::Unhealthy(message) => write!(f, "unhealthy: {}", message),
        }
    }
}
