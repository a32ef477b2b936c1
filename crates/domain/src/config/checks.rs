use super::errors::ConfigError;
use crate::{DnsName, RecordType, ServerAddress};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_DAYS: u32 = 7;

/// One `[[checks]]` table. `kind` selects the checker.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind")]
pub enum CheckConfig {
    #[serde(rename = "dns")]
    AnswerMatch(AnswerMatchConfig),

    #[serde(rename = "dnssoa")]
    ZoneConsistency(ZoneConsistencyConfig),

    #[serde(rename = "rrsig")]
    SignatureFreshness(SignatureFreshnessConfig),
}

impl CheckConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckConfig::AnswerMatch(_) => "dns",
            CheckConfig::ZoneConsistency(_) => "dnssoa",
            CheckConfig::SignatureFreshness(_) => "rrsig",
        }
    }

    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let reason = match self {
            CheckConfig::AnswerMatch(cfg) => cfg.validate().err(),
            CheckConfig::ZoneConsistency(cfg) => cfg.validate().err(),
            CheckConfig::SignatureFreshness(_) => None,
        };

        match reason {
            Some(reason) => Err(ConfigError::InvalidCheck {
                index,
                kind: self.kind(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

/// Answer-set match: every answer of `type` for `name` must be acceptable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerMatchConfig {
    pub server: ServerAddress,
    pub name: DnsName,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub acceptable: Vec<String>,
}

impl AnswerMatchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.acceptable.is_empty() {
            return Err("acceptable list is empty".to_string());
        }
        // NS targets are compared as names, so every entry must be one.
        if self.record_type == RecordType::NS {
            for entry in &self.acceptable {
                DnsName::parse(entry).map_err(|e| e.to_string())?;
            }
        }
        Ok(())
    }
}

/// Zone consistency: all servers must serve the same SOA for `domain`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneConsistencyConfig {
    pub domain: DnsName,
    pub servers: Vec<ServerAddress>,
}

impl ZoneConsistencyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.servers.is_empty() {
            return Err("no servers configured".to_string());
        }
        Ok(())
    }
}

/// Signature freshness: an active RRSIG valid for at least `min_days` more days.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureFreshnessConfig {
    pub server: ServerAddress,
    pub name: DnsName,
    #[serde(default = "default_min_days", alias = "minDays")]
    pub min_days: u32,
}

fn default_min_days() -> u32 {
    DEFAULT_MIN_DAYS
}
