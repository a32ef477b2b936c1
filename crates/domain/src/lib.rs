//! dnsmon domain layer
pub mod check_result;
pub mod config;
pub mod dns_name;
pub mod dns_query;
pub mod dns_record;
pub mod dns_reply;
pub mod errors;
pub mod rcode;
pub mod server_address;

pub use check_result::CheckResult;
pub use config::{
    AnswerMatchConfig, CheckConfig, CliOverrides, Config, ConfigError, LoggingConfig,
    SignatureFreshnessConfig, ZoneConsistencyConfig,
};
pub use dns_name::DnsName;
pub use dns_query::{DnsQuery, EDNS_PAYLOAD_SIZE};
pub use dns_record::{RecordData, RecordType, ResourceRecord, Section, SignatureWindow};
pub use dns_reply::{DnsReply, Question};
pub use errors::DomainError;
pub use rcode::Rcode;
pub use server_address::{ServerAddress, DEFAULT_DNS_PORT};
