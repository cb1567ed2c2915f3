//! The event state machine.
//!
//! `EventExtractor` consumes the calendar one line at a time and hands back a finished
//! `EventRecord` whenever an `END:VEVENT` closes an event whose start date fell inside
//! the configured `DateRange`. All other events are dropped without a trace.
//!
//! Structural anomalies (nested `BEGIN:VEVENT`, `END:VEVENT` without a `BEGIN`, a
//! `DESCRIPTION` before any `DTSTART`, ...) are logged as warnings and never abort the
//! conversion.
//!
//! # Examples
//!
//! ```rust
//! use ical2csv::{parser::EventParser, types::DateRange};
//!
//! let input = "BEGIN:VEVENT\r\nDTSTART;VALUE=DATE:20171225\r\nSUMMARY:Xmas\r\nEND:VEVENT\r\n";
//! let range = DateRange::new(20171201, 20171231).unwrap();
//!
//! for event in EventParser::new(input.as_bytes(), range) {
//!     println!("{:?}", event.unwrap());
//! }
//! ```

use std::io::BufRead;

use super::{Line, LineReader, ParserError, unescape};
use crate::component::EventRecord;
use crate::property::Property;
use crate::types::{DateRange, DateValue, TimeValue};

const EMPTY_DESCRIPTION: &str = "EMPTY DESCRIPTION";
const EMPTY_SUMMARY: &str = "EMPTY SUMMARY";
const EMPTY_LOCATION: &str = "EMPTY LOCATION";
const EMPTY_STATUS: &str = "EMPTY STATUS";

/// Explicit parser state, threaded through `process_line`.
#[derive(Debug, Clone)]
pub struct EventExtractor {
    range: DateRange,
    inside_event: bool,
    inside_description: bool,
    seen_start: bool,
    /// Depth of components nested in the current event, e.g. `VALARM`.
    nested: usize,
    record: EventRecord,
    events: usize,
    warnings: usize,
}

impl EventExtractor {
    pub fn new(range: DateRange) -> Self {
        EventExtractor {
            range,
            inside_event: false,
            inside_description: false,
            seen_start: false,
            nested: 0,
            record: EventRecord::default(),
            events: 0,
            warnings: 0,
        }
    }

    /// Number of `END:VEVENT` markers seen so far.
    pub fn events(&self) -> usize {
        self.events
    }

    /// Number of structural anomalies reported so far.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn is_inside_event(&self) -> bool {
        self.inside_event
    }

    /// The record accumulated for the event currently being read.
    pub fn current(&self) -> &EventRecord {
        &self.record
    }

    /// Feed one line, returning the finished record if this line closed an in-range event.
    pub fn process_line(&mut self, line: &Line) -> Option<EventRecord> {
        let text = line.as_str();
        let property = Property::recognize(text);

        match property {
            Some(Property::BeginEvent) => {
                if self.inside_event {
                    self.warn(line, "nested BEGIN:VEVENT, discarding the open event");
                }
                self.reset();
                self.inside_event = true;
                return None;
            }
            Some(Property::EndEvent) => {
                if !self.inside_event {
                    self.warn(line, "END:VEVENT without BEGIN:VEVENT");
                }
                return self.finish(line);
            }
            _ => {}
        }

        if self.inside_description {
            if let Some(continuation) = text.strip_prefix(' ') {
                self.record.description.push_str(continuation);
                return None;
            }
            self.close_description();
        }

        if !self.inside_event {
            return None;
        }

        match property? {
            Property::BeginOther => self.nested += 1,
            Property::EndOther => self.nested = self.nested.saturating_sub(1),
            _ if self.nested > 0 => {}
            Property::TimedStart(date, time) => {
                self.warn(
                    line,
                    "timed DTSTART found, the time of day is ignored for range filtering",
                );
                self.start(line, date, time, false);
            }
            Property::UntimedStart(date) => {
                self.start(line, date, TimeValue::default(), true);
            }
            Property::TimedEnd(date, time) => self.record.set_end(date, time),
            Property::UntimedEnd(date) => {
                // All-day events end on the following (exclusive) day, which carries no
                // information.
                if !self.record.is_untimed_start {
                    self.record.set_end(date, TimeValue::default());
                }
            }
            Property::Description(text) => {
                if !self.seen_start {
                    self.warn(line, "DESCRIPTION found before any DTSTART");
                }
                self.record.description = or_placeholder(text, EMPTY_DESCRIPTION).to_owned();
                self.inside_description = true;
            }
            Property::Summary(text) => {
                if self.record.in_range {
                    self.record.summary = unescape(or_placeholder(text, EMPTY_SUMMARY));
                }
            }
            Property::Location(text) => {
                if self.record.in_range {
                    self.record.location = or_placeholder(text, EMPTY_LOCATION).to_owned();
                }
            }
            Property::Status(text) => {
                if self.record.in_range {
                    self.record.status = or_placeholder(text, EMPTY_STATUS).to_owned();
                }
            }
            Property::BeginEvent | Property::EndEvent => {}
        }
        None
    }

    /// Called once the input is exhausted.
    pub fn finish_input(&mut self) {
        if self.inside_event {
            self.warnings += 1;
            tracing::warn!("input ended inside a VEVENT, discarding it");
            self.reset();
        }
    }

    fn start(&mut self, line: &Line, date: DateValue, time: TimeValue, untimed: bool) {
        if self.seen_start {
            self.warn(line, "duplicate DTSTART in one event");
            if self.record.in_range {
                return;
            }
        }
        self.seen_start = true;
        let checked = self.check_range(date, time);
        self.record.set_start(checked);
        self.record.is_untimed_start = untimed;
    }

    fn check_range(&mut self, date: DateValue, time: TimeValue) -> Option<(DateValue, TimeValue)> {
        if self.record.in_range || self.range.contains(&date) {
            self.record.in_range = true;
            Some((date, time))
        } else {
            None
        }
    }

    fn close_description(&mut self) {
        self.record.description = unescape(&self.record.description);
        self.inside_description = false;
    }

    fn finish(&mut self, line: &Line) -> Option<EventRecord> {
        self.events += 1;
        if self.inside_description {
            self.close_description();
        }
        let record = std::mem::take(&mut self.record);
        self.reset();

        if record.in_range {
            tracing::debug!(line = line.number(), "event in range");
            Some(record)
        } else {
            tracing::debug!(line = line.number(), "event out of range, skipped");
            None
        }
    }

    fn reset(&mut self) {
        self.inside_event = false;
        self.inside_description = false;
        self.seen_start = false;
        self.nested = 0;
        self.record = EventRecord::default();
    }

    fn warn(&mut self, line: &Line, message: &str) {
        self.warnings += 1;
        tracing::warn!(line = line.number(), "{message}");
    }
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() { placeholder } else { text }
}

/// Streaming iterator over the in-range events of a calendar.
pub struct EventParser<R: BufRead> {
    lines: LineReader<R>,
    extractor: EventExtractor,
    done: bool,
}

impl<R: BufRead> EventParser<R> {
    pub fn new(reader: R, range: DateRange) -> Self {
        EventParser {
            lines: LineReader::new(reader),
            extractor: EventExtractor::new(range),
            done: false,
        }
    }

    pub fn extractor(&self) -> &EventExtractor {
        &self.extractor
    }
}

impl<R: BufRead> Iterator for EventParser<R> {
    type Item = Result<EventRecord, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
            if let Some(record) = self.extractor.process_line(&line) {
                return Some(Ok(record));
            }
        }
        self.done = true;
        self.extractor.finish_input();
        None
    }
}
