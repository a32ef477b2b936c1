//! DNS Message Builder
//!
//! Serializes a [`DnsQuery`] to wire format with `hickory-proto` and appends
//! the EDNS0 OPT pseudo-record every probe carries.

use super::record_type_map::RecordTypeMapper;
use dnsmon_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

const HEADER_LEN: usize = 12;
const ARCOUNT_OFFSET: usize = 10;
const OPT_TYPE: u16 = 41;
const DO_FLAG: u16 = 0x8000;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a fresh random ID.
    ///
    /// Returns the ID alongside the bytes so the transport can match the
    /// reply.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_with_id(query, id)?;
        Ok((id, bytes))
    }

    pub fn build_query_with_id(query: &DnsQuery, id: u16) -> Result<Vec<u8>, DomainError> {
        let fqdn = query.name.to_fqdn();
        let name = Name::from_str(&fqdn).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", fqdn, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.add_query(question);

        let mut buf = Self::serialize_message(&message)?;
        Self::append_opt_record(&mut buf, query.edns_payload, query.dnssec_ok)?;
        Ok(buf)
    }

    /// Append an OPT record (RFC 6891 §6.1.2) and bump ARCOUNT.
    fn append_opt_record(
        buf: &mut Vec<u8>,
        payload_size: u16,
        dnssec_ok: bool,
    ) -> Result<(), DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::QueryEncoding(format!(
                "serialized message is only {} bytes",
                buf.len()
            )));
        }

        let arcount = u16::from_be_bytes([buf[ARCOUNT_OFFSET], buf[ARCOUNT_OFFSET + 1]]);
        let arcount = arcount
            .checked_add(1)
            .ok_or_else(|| DomainError::QueryEncoding("ARCOUNT overflow".to_string()))?;
        buf[ARCOUNT_OFFSET..ARCOUNT_OFFSET + 2].copy_from_slice(&arcount.to_be_bytes());

        let flags = if dnssec_ok { DO_FLAG } else { 0 };

        buf.push(0x00); // root owner
        buf.extend_from_slice(&OPT_TYPE.to_be_bytes());
        buf.extend_from_slice(&payload_size.to_be_bytes());
        buf.push(0x00); // extended RCODE
        buf.push(0x00); // version
        buf.extend_from_slice(&flags.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00]); // RDLEN
        Ok(())
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::QueryEncoding(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
