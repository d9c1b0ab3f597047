use crate::event::Event;
use crate::registry::RecognizerTable;
use crate::timestamp::{split_line, Framing};
use crate::ParseError;
use once_cell::sync::Lazy;
use std::io::BufRead;
use std::sync::Arc;
use tracing::info;

/// The built-in table, compiled on first use and shared by every parser.
static DEFAULT_TABLE: Lazy<Arc<RecognizerTable>> = Lazy::new(|| Arc::new(RecognizerTable::new()));

/// Parses single log lines into [`Event`]s.
///
/// Holds a recognizer table and the line framing to expect. Cloning is cheap
/// and the parser can be shared across threads; parsing keeps no state between
/// lines.
#[derive(Debug, Clone)]
pub struct LogParser {
    table: Arc<RecognizerTable>,
    framing: Framing,
}

impl LogParser {
    /// Built-in recognizers, standard `L MM/DD/YYYY - HH:MM:SS: ` framing.
    pub fn new() -> Self {
        Self {
            table: Arc::clone(&DEFAULT_TABLE),
            framing: Framing::Standard,
        }
    }

    pub fn with_framing(mut self, framing: Framing) -> Self {
        info!("Using {} line framing", framing.name());
        self.framing = framing;
        self
    }

    /// Replace the recognizer table, e.g. one extended with custom recognizers.
    pub fn with_recognizers(mut self, table: impl Into<Arc<RecognizerTable>>) -> Self {
        let table = table.into();
        info!("Using custom recognizer table with {} recognizers", table.len());
        self.table = table;
        self
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    pub fn recognizers(&self) -> &RecognizerTable {
        &self.table
    }

    /// Parse one line. Only a missing or invalid timestamp prefix is an error;
    /// anything after a valid prefix yields an event.
    pub fn parse(&self, line: &str) -> Result<Event, ParseError> {
        let (time, payload) = split_line(line, self.framing)?;
        Ok(self.table.dispatch(time, payload))
    }

    /// Parse every non-blank line of `reader`, paired with its 1-based line number.
    ///
    /// Read failures are yielded as [`ParseError::Io`] and end the iteration.
    pub fn parse_lines<'a, R>(
        &'a self,
        reader: R,
    ) -> impl Iterator<Item = (usize, Result<Event, ParseError>)> + 'a
    where
        R: BufRead + 'a,
    {
        let mut failed = false;
        reader
            .lines()
            .enumerate()
            .map_while(move |(idx, line)| {
                if failed {
                    return None;
                }
                let number = idx + 1;
                match line {
                    Ok(line) if line.trim().is_empty() => Some(None),
                    Ok(line) => Some(Some((number, self.parse(&line)))),
                    Err(e) => {
                        failed = true;
                        Some(Some((number, Err(ParseError::from(e)))))
                    }
                }
            })
            .flatten()
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a line with the built-in recognizers.
pub fn parse(line: &str) -> Result<Event, ParseError> {
    LogParser::new().parse(line)
}

/// Parse a line with a caller-supplied recognizer table.
pub fn parse_with_recognizers(line: &str, table: &RecognizerTable) -> Result<Event, ParseError> {
    let (time, payload) = split_line(line, Framing::Standard)?;
    Ok(table.dispatch(time, payload))
}
