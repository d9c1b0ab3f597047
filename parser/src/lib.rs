// Parser crate for CS:GO server log lines
// Timestamp prefix -> recognizer table -> typed event

pub mod types;
pub mod timestamp;
pub mod event;
pub mod extract;
pub mod recognizers;
pub mod registry;
pub mod parser;
pub mod json;

#[cfg(test)]
mod fixtures;

// Re-export main types
pub use types::*;
pub use event::{Event, Get5EventKind, Get5EventParams};
pub use timestamp::{split_line, Framing};
pub use registry::{Recognizer, RecognizerTable};
pub use extract::Extractor;
pub use parser::{parse, parse_with_recognizers, LogParser};
pub use json::{from_json, to_json, to_json_pretty, write_json};
