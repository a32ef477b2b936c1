#![allow(dead_code)]

use chrono::{DateTime, Utc};
use dnsmon_domain::{
    DnsName, DnsReply, Question, Rcode, RecordData, RecordType, ResourceRecord, Section,
    ServerAddress, SignatureWindow,
};

pub fn server(addr: &str) -> ServerAddress {
    addr.parse().unwrap()
}

pub fn name(value: &str) -> DnsName {
    DnsName::parse(value).unwrap()
}

pub fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn ns(owner: &str, target: &str) -> ResourceRecord {
    let target = name(target);
    ResourceRecord::new(
        Section::Answer,
        name(owner),
        RecordType::NS,
        3600,
        target.to_string(),
        RecordData::Ns { target },
    )
}

pub fn a(owner: &str, addr: &str) -> ResourceRecord {
    ResourceRecord::new(
        Section::Answer,
        name(owner),
        RecordType::A,
        300,
        addr,
        RecordData::Other,
    )
}

pub fn txt(owner: &str, rendering: &str) -> ResourceRecord {
    ResourceRecord::new(
        Section::Answer,
        name(owner),
        RecordType::TXT,
        300,
        rendering,
        RecordData::Other,
    )
}

pub fn soa(owner: &str, serial: u32) -> ResourceRecord {
    ResourceRecord::new(
        Section::Answer,
        name(owner),
        RecordType::SOA,
        3600,
        format!(
            "ns1.{owner}. hostmaster.{owner}. {serial} 3600 900 604800 60",
            owner = owner,
            serial = serial
        ),
        RecordData::Other,
    )
}

pub fn rrsig(owner: &str, inception: &str, expiration: &str) -> ResourceRecord {
    let window = SignatureWindow::new(
        Some(RecordType::SOA),
        12345,
        ts(inception),
        ts(expiration),
    );
    ResourceRecord::new(
        Section::Answer,
        name(owner),
        RecordType::RRSIG,
        3600,
        format!("SOA 13 2 3600 {} {} 12345 {}. sig", expiration, inception, owner),
        RecordData::Rrsig(window),
    )
}

pub fn in_section(mut record: ResourceRecord, section: Section) -> ResourceRecord {
    record.section = section;
    record
}

pub fn reply_with(records: Vec<ResourceRecord>) -> DnsReply {
    let mut reply = DnsReply::new(1, Rcode::NoError);
    reply.records = records;
    reply
}

pub fn reply_for(qname: &str, qtype: RecordType, records: Vec<ResourceRecord>) -> DnsReply {
    let mut reply = reply_with(records);
    reply.question = Some(Question {
        name: name(qname),
        record_type: Some(qtype),
    });
    reply
}

pub fn rcode_reply(rcode: Rcode) -> DnsReply {
    DnsReply::new(1, rcode)
}
