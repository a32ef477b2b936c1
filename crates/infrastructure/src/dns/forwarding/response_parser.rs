use super::record_type_map::RecordTypeMapper;
use dnsmon_domain::{
    DnsName, DnsReply, DomainError, Question, Rcode, RecordData, ResourceRecord, Section,
    SignatureWindow,
};
use hickory_proto::dnssec::rdata::DNSSECRData;
use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RData, Record};
use tracing::{debug, warn};

/// Decodes wire-format replies into [`DnsReply`].
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsReply, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = Rcode::from_u16(u16::from(message.response_code()));
        let mut reply = DnsReply::new(message.id(), rcode);
        reply.truncated = message.truncated();

        if let Some(query) = message.queries().first() {
            reply.question = Some(Question {
                name: Self::convert_name(query.name())?,
                record_type: RecordTypeMapper::from_hickory(query.query_type()),
            });
        }

        let sections = [
            (Section::Answer, message.answers()),
            (Section::Authority, message.name_servers()),
            (Section::Additional, message.additionals()),
        ];

        let mut skipped = 0usize;
        for (section, records) in sections {
            for record in records {
                match Self::convert_record(record, section) {
                    Ok(Some(converted)) => reply.records.push(converted),
                    Ok(None) => skipped += 1,
                    Err(e) => {
                        warn!(section = %section, error = %e, "Skipping record");
                        skipped += 1;
                    }
                }
            }
        }

        debug!(
            id = reply.id,
            rcode = %reply.rcode,
            truncated = reply.truncated,
            records = reply.records.len(),
            skipped,
            "DNS response parsed"
        );

        Ok(reply)
    }

    /// Converts one record; `None` for record types with no domain counterpart.
    ///
    /// An error here only drops this record, never the reply.
    fn convert_record(
        record: &Record,
        section: Section,
    ) -> Result<Option<ResourceRecord>, DomainError> {
        let Some(record_type) = RecordTypeMapper::from_hickory(record.record_type()) else {
            return Ok(None);
        };

        let data = match record.data() {
            RData::NS(ns) => RecordData::Ns {
                target: Self::convert_name(&ns.0)?,
            },
            RData::DNSSEC(DNSSECRData::RRSIG(rrsig)) => {
                let input = rrsig.input();
                RecordData::Rrsig(SignatureWindow::from_epoch_secs(
                    RecordTypeMapper::from_hickory(input.type_covered),
                    input.key_tag,
                    input.sig_inception.get(),
                    input.sig_expiration.get(),
                ))
            }
            _ => RecordData::Other,
        };

        Ok(Some(ResourceRecord::new(
            section,
            Self::convert_name(record.name())?,
            record_type,
            record.ttl(),
            record.data().to_string(),
            data,
        )))
    }

    fn convert_name(name: &Name) -> Result<DnsName, DomainError> {
        let ascii = name.to_ascii();
        DnsName::from_wire_text(&ascii).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Unusable name '{}' in response: {}", ascii, e))
        })
    }
}
