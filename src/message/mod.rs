//! Inbound payload parsing

mod parser;

pub use parser::parse_trace_event;
