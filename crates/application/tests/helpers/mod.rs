#![allow(unused_imports)]

mod mock_exchange;
mod records;

pub use mock_exchange::{FixedClock, MockDnsExchange, RecordedCall};
pub use records::*;
