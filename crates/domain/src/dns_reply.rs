use crate::{DnsName, Rcode, RecordType, ResourceRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DnsName,
    pub record_type: Option<RecordType>,
}

/// A decoded DNS reply.
///
/// Records of every section are kept in wire order (answer, authority,
/// additional); checks walk them sequentially and stop at the first
/// disqualifying record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsReply {
    pub id: u16,
    pub rcode: Rcode,
    pub truncated: bool,
    pub question: Option<Question>,
    pub records: Vec<ResourceRecord>,
}

impl DnsReply {
    pub fn new(id: u16, rcode: Rcode) -> Self {
        Self {
            id,
            rcode,
            truncated: false,
            question: None,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.records.iter()
    }

    pub fn answers(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.records.iter().filter(|r| r.is_answer())
    }

    /// Answer records of `record_type` owned by `name`.
    pub fn answers_for<'a>(
        &'a self,
        name: &DnsName,
        record_type: RecordType,
    ) -> impl Iterator<Item = &'a ResourceRecord> + 'a {
        let name = name.clone();
        self.answers()
            .filter(move |r| r.record_type == record_type && r.name == name)
    }
}
