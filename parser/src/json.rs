//! Serialization adapter.
//!
//! Events are written as JSON objects tagged with their `type`. `serde_json`
//! leaves `<`, `>` and `&` alone, which is what log storage wants.

use crate::event::Event;
use crate::ParseError;
use std::io::Write;

pub fn to_json(event: &Event) -> Result<String, ParseError> {
    Ok(serde_json::to_string(event)?)
}

pub fn to_json_pretty(event: &Event) -> Result<String, ParseError> {
    Ok(serde_json::to_string_pretty(event)?)
}

/// Write `event` as one newline-terminated JSON line.
pub fn write_json<W: Write>(mut writer: W, event: &Event) -> Result<(), ParseError> {
    serde_json::to_writer(&mut writer, event)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Decode an event previously written by [`to_json`].
pub fn from_json(json: &str) -> Result<Event, ParseError> {
    Ok(serde_json::from_str(json)?)
}
