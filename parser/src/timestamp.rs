use crate::ParseError;
use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

/// `L 10/15/2022 - 18:30:30: <payload>` as written to the server's log file.
static LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^L ([0-9]{2}/[0-9]{2}/[0-9]{4} - [0-9]{2}:[0-9]{2}:[0-9]{2}): (.*)$").unwrap()
});

/// `10/15/2022 - 18:30:30.123 - <payload>` as sent over HTTP log forwarding.
static HTTP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^([0-9]{2}/[0-9]{2}/[0-9]{4} - [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}) - (.*)$")
        .unwrap()
});

const LOG_TIME_FORMAT: &str = "%m/%d/%Y - %H:%M:%S";
const HTTP_TIME_FORMAT: &str = "%m/%d/%Y - %H:%M:%S%.3f";

/// Which line prefix to expect. A single parse call only ever uses one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Framing {
    /// `L MM/DD/YYYY - HH:MM:SS: `
    #[default]
    Standard,
    /// `MM/DD/YYYY - HH:MM:SS.mmm - `
    Http,
}

impl Framing {
    pub fn name(&self) -> &'static str {
        match self {
            Framing::Standard => "standard",
            Framing::Http => "http",
        }
    }

    fn grammar(&self) -> (&'static Regex, &'static str) {
        match self {
            Framing::Standard => (&*LOG_LINE, LOG_TIME_FORMAT),
            Framing::Http => (&*HTTP_LINE, HTTP_TIME_FORMAT),
        }
    }
}

/// Strip the prefix off `line`, returning the parsed time and the payload.
///
/// A trailing `\n` or `\r\n` is dropped; the rest of the payload is returned
/// untouched. Fails with [`ParseError::NoMatch`] when the prefix is missing and
/// [`ParseError::InvalidTimestamp`] when it is there but not a real date.
pub fn split_line(line: &str, framing: Framing) -> Result<(NaiveDateTime, &str), ParseError> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);

    let (pattern, format) = framing.grammar();
    let caps = pattern.captures(line).ok_or(ParseError::NoMatch)?;

    let (stamp, payload) = match (caps.get(1), caps.get(2)) {
        (Some(stamp), Some(payload)) => (stamp.as_str(), payload.as_str()),
        _ => return Err(ParseError::NoMatch),
    };

    let time = NaiveDateTime::parse_from_str(stamp, format)
        .map_err(|e| ParseError::InvalidTimestamp(format!("{}: {}", stamp, e)))?;

    // chrono reads second 60 as a leap second; log clocks never write one.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(ParseError::InvalidTimestamp(format!("{}: second out of range", stamp)));
    }

    Ok((time, payload))
}
