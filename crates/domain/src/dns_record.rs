pub mod record;
pub mod record_type;
pub mod section;

pub use record::{RecordData, ResourceRecord, SignatureWindow};
pub use record_type::RecordType;
pub use section::Section;
