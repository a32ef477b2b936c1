use super::{RecordType, Section};
use crate::DnsName;
use chrono::{DateTime, Duration, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Validity window carried by an RRSIG record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureWindow {
    pub type_covered: Option<RecordType>,
    pub key_tag: u16,
    pub inception: DateTime<Utc>,
    pub expiration: DateTime<Utc>,
}

impl SignatureWindow {
    pub fn new(
        type_covered: Option<RecordType>,
        key_tag: u16,
        inception: DateTime<Utc>,
        expiration: DateTime<Utc>,
    ) -> Self {
        Self {
            type_covered,
            key_tag,
            inception,
            expiration,
        }
    }

    /// Builds a window from the 32-bit epoch seconds found on the wire.
    pub fn from_epoch_secs(
        type_covered: Option<RecordType>,
        key_tag: u16,
        inception: u32,
        expiration: u32,
    ) -> Self {
        Self::new(
            type_covered,
            key_tag,
            DateTime::<Utc>::from_timestamp(i64::from(inception), 0).unwrap_or_default(),
            DateTime::<Utc>::from_timestamp(i64::from(expiration), 0).unwrap_or_default(),
        )
    }

    /// True when `now + margin` is already past the expiration.
    pub fn expires_within(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        now + margin > self.expiration
    }

    pub fn is_pending(&self, now: DateTime<Utc>) -> bool {
        now < self.inception
    }

    /// Fractional days until expiration; negative once expired.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> f64 {
        (self.expiration - now).num_seconds() as f64 / SECONDS_PER_DAY
    }
}

/// Typed payload of a record, for the record types checks inspect structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Ns { target: DnsName },
    Rrsig(SignatureWindow),
    Other,
}

/// One parsed resource record.
///
/// `rendering` is the presentation form of the RDATA (`192.0.2.1`,
/// `ns1.example.com.`, `ns1.example.com. hostmaster.example.com. 1 3600 900
/// 604800 60`); it is the value used for string comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub section: Section,
    pub name: DnsName,
    pub record_type: RecordType,
    pub ttl: u32,
    pub rendering: String,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(
        section: Section,
        name: DnsName,
        record_type: RecordType,
        ttl: u32,
        rendering: impl Into<String>,
        data: RecordData,
    ) -> Self {
        Self {
            section,
            name,
            record_type,
            ttl,
            rendering: rendering.into(),
            data,
        }
    }

    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    pub fn is_answer(&self) -> bool {
        self.section == Section::Answer
    }

    pub fn as_ns(&self) -> Option<&DnsName> {
        match &self.data {
            RecordData::Ns { target } => Some(target),
            _ => None,
        }
    }

    pub fn as_rrsig(&self) -> Option<&SignatureWindow> {
        match &self.data {
            RecordData::Rrsig(window) => Some(window),
            _ => None,
        }
    }
}
