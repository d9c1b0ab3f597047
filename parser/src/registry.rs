use crate::event::{Event, Unknown};
use crate::recognizers::all_recognizers;
use crate::ParseError;
use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use tracing::{debug, info, trace, warn};

type ExtractFn = dyn Fn(NaiveDateTime, &Captures<'_>) -> Event + Send + Sync;

/// A payload pattern paired with the extractor that turns its captures into an event.
///
/// The pattern is anchored on construction, so it has to describe the whole
/// payload rather than some substring of it.
pub struct Recognizer {
    name: String,
    pattern: Regex,
    extract: Box<ExtractFn>,
}

impl Recognizer {
    pub fn new<F>(name: impl Into<String>, pattern: &str, extract: F) -> Result<Self, ParseError>
    where
        F: Fn(NaiveDateTime, &Captures<'_>) -> Event + Send + Sync + 'static,
    {
        let pattern = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            name: name.into(),
            pattern,
            extract: Box::new(extract),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The anchored pattern actually used for matching.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn is_match(&self, payload: &str) -> bool {
        self.pattern.is_match(payload)
    }

    /// Run the extractor if the pattern accepts `payload`.
    pub fn recognize(&self, time: NaiveDateTime, payload: &str) -> Option<Event> {
        self.pattern
            .captures(payload)
            .map(|caps| (self.extract)(time, &caps))
    }
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recognizer")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Ordered collection of recognizers.
///
/// Earlier entries take precedence: [`RecognizerTable::dispatch`] uses the first
/// recognizer that accepts the payload. Server-written lines match exactly one
/// built-in pattern. Chat text can imitate other lines, so the built-in order
/// puts free-text patterns (`PlayerSay`, `PlayerKilledSuicide`) ahead of the
/// rest; order otherwise matters only when a custom recognizer overlaps a
/// built-in one.
///
/// ## Adding a Recognizer
///
/// Built-in recognizers live in `recognizers.rs`. Callers can extend a table at
/// runtime with [`register`](Self::register) (lowest precedence) or
/// [`prepend`](Self::prepend) (highest precedence).
#[derive(Debug)]
pub struct RecognizerTable {
    recognizers: Vec<Recognizer>,
}

impl RecognizerTable {
    /// Table holding every built-in recognizer.
    pub fn new() -> Self {
        let recognizers = all_recognizers();

        info!(
            "Registered {} recognizers: {}",
            recognizers.len(),
            recognizers.iter().map(|r| r.name()).collect::<Vec<_>>().join(", ")
        );

        Self { recognizers }
    }

    /// Table with no recognizers; every payload dispatches to `Unknown`.
    pub fn empty() -> Self {
        Self {
            recognizers: Vec::new(),
        }
    }

    /// Append a recognizer after all existing ones.
    pub fn register(&mut self, recognizer: Recognizer) {
        debug!("Registering recognizer: {}", recognizer.name());
        self.warn_if_registered(recognizer.name());
        self.recognizers.push(recognizer);
    }

    /// Insert a recognizer ahead of all existing ones.
    pub fn prepend(&mut self, recognizer: Recognizer) {
        debug!("Prepending recognizer: {}", recognizer.name());
        self.warn_if_registered(recognizer.name());
        self.recognizers.insert(0, recognizer);
    }

    /// Remove every recognizer called `name`, returning how many were dropped.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.recognizers.len();
        self.recognizers.retain(|r| r.name() != name);
        before - self.recognizers.len()
    }

    /// True when a recognizer called `name` is already in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn warn_if_registered(&self, name: &str) -> bool {
        let duplicate = self.contains(name);
        if duplicate {
            warn!("Recognizer '{}' registered twice", name);
        }
        duplicate
    }

    pub fn get(&self, name: &str) -> Option<&Recognizer> {
        self.recognizers.iter().find(|r| r.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recognizer> {
        self.recognizers.iter()
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// First recognizer accepting `payload`.
    pub fn find(&self, payload: &str) -> Option<&Recognizer> {
        self.recognizers.iter().find(|r| r.is_match(payload))
    }

    /// Every recognizer accepting `payload`. More than one means overlapping patterns.
    pub fn matching<'a>(&'a self, payload: &'a str) -> impl Iterator<Item = &'a Recognizer> + 'a {
        self.recognizers.iter().filter(move |r| r.is_match(payload))
    }

    /// Turn a stripped payload into an event, falling back to `Unknown`.
    pub fn dispatch(&self, time: NaiveDateTime, payload: &str) -> Event {
        for recognizer in &self.recognizers {
            if let Some(event) = recognizer.recognize(time, payload) {
                trace!("Payload matched recognizer '{}'", recognizer.name());
                return event;
            }
        }

        debug!("No recognizer matched payload: {}", payload);
        Unknown {
            time,
            raw: payload.to_string(),
        }
        .into()
    }
}

impl Default for RecognizerTable {
    fn default() -> Self {
        Self::new()
    }
}
