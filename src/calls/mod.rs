pub mod call_records;

pub use call_records::parse_calls;
pub use call_records::read_calls;
pub use call_records::serialize_calls;
pub use call_records::write_calls;
