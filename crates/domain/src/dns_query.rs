use crate::{DnsName, RecordType};

/// UDP payload size announced in the EDNS0 OPT record of every probe.
pub const EDNS_PAYLOAD_SIZE: u16 = 4000;

/// A single-question probe query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: DnsName,
    pub record_type: RecordType,
    pub recursion_desired: bool,
    pub dnssec_ok: bool,
    pub edns_payload: u16,
}

impl DnsQuery {
    /// Query with RD set, for asking a resolver.
    pub fn recursive(name: DnsName, record_type: RecordType) -> Self {
        Self {
            name,
            record_type,
            recursion_desired: true,
            dnssec_ok: false,
            edns_payload: EDNS_PAYLOAD_SIZE,
        }
    }

    /// Query with RD cleared, for asking an authoritative server.
    pub fn authoritative(name: DnsName, record_type: RecordType) -> Self {
        Self {
            recursion_desired: false,
            ..Self::recursive(name, record_type)
        }
    }

    pub fn with_dnssec_ok(mut self) -> Self {
        self.dnssec_ok = true;
        self
    }
}
