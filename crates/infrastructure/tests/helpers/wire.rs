#![allow(dead_code)]

//! Hand-assembled wire-format messages.

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_TXT: u16 = 16;
pub const TYPE_RRSIG: u16 = 46;
pub const TYPE_PRIVATE: u16 = 0xFF00;

pub const FLAGS_NOERROR: u16 = 0x8180;
pub const FLAGS_NXDOMAIN: u16 = 0x8183;
pub const FLAGS_TRUNCATED: u16 = 0x8380;

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);
    buf
}

pub fn question(name: &str, qtype: u16) -> Vec<u8> {
    let mut buf = encode_name(name);
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]); // IN
    buf
}

pub fn rr(owner: &str, rtype: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut buf = encode_name(owner);
    buf.extend_from_slice(&rtype.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]); // IN
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    buf.extend_from_slice(rdata);
    buf
}

pub fn a_rdata(ip: [u8; 4]) -> Vec<u8> {
    ip.to_vec()
}

pub fn ns_rdata(target: &str) -> Vec<u8> {
    encode_name(target)
}

pub fn soa_rdata(mname: &str, rname: &str, serial: u32) -> Vec<u8> {
    let mut buf = encode_name(mname);
    buf.extend(encode_name(rname));
    for value in [serial, 3600, 900, 604800, 60] {
        buf.extend_from_slice(&value.to_be_bytes());
    }
    buf
}

pub fn rrsig_rdata(
    type_covered: u16,
    key_tag: u16,
    inception: u32,
    expiration: u32,
    signer: &str,
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&type_covered.to_be_bytes());
    buf.push(13); // ECDSAP256SHA256
    buf.push(2); // labels
    buf.extend_from_slice(&3600u32.to_be_bytes());
    buf.extend_from_slice(&expiration.to_be_bytes());
    buf.extend_from_slice(&inception.to_be_bytes());
    buf.extend_from_slice(&key_tag.to_be_bytes());
    buf.extend(encode_name(signer));
    buf.extend_from_slice(&[0x5A; 64]); // signature
    buf
}

/// Builder for a reply message, one question and any number of records.
pub struct ReplyBuilder {
    id: u16,
    flags: u16,
    question: Option<Vec<u8>>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
}

impl ReplyBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: FLAGS_NOERROR,
            question: None,
            answers: Vec::new(),
            authority: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.question = Some(question(name, qtype));
        self
    }

    pub fn raw_question(mut self, bytes: &[u8]) -> Self {
        self.question = Some(bytes.to_vec());
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authority.push(record);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&(self.question.is_some() as u16).to_be_bytes());
        buf.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        buf.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT
        if let Some(question) = self.question {
            buf.extend(question);
        }
        for record in self.answers.into_iter().chain(self.authority) {
            buf.extend(record);
        }
        buf
    }
}

/// ID of a query datagram.
pub fn query_id(query: &[u8]) -> u16 {
    u16::from_be_bytes([query[0], query[1]])
}

/// Question section of a query datagram (name, type, class).
pub fn query_question(query: &[u8]) -> &[u8] {
    let mut pos = 12;
    while query[pos] != 0 {
        pos += usize::from(query[pos]) + 1;
    }
    &query[12..pos + 5]
}
