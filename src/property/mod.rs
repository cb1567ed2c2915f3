//! Recognise the handful of content lines the extractor cares about.
//!
//! Every recognised line starts with its exact, case-sensitive tag. Lines which match
//! none of the patterns are simply not interesting and yield `None`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::types::{DateValue, TimeValue};
use crate::{BEGIN, BEGIN_EVENT, DESCRIPTION, END, END_EVENT, LOCATION, STATUS, SUMMARY};

lazy_static! {
    static ref TIMED_START: Regex =
        Regex::new(r"^DTSTART(?:;TZID=[^:]*)?:([0-9]{4})([0-9]{2})([0-9]{2})T([0-9]{2})([0-9]{2})([0-9]{2})").unwrap();
    static ref UNTIMED_START: Regex =
        Regex::new(r"^DTSTART;VALUE=DATE:([0-9]{4})([0-9]{2})([0-9]{2})").unwrap();
    static ref TIMED_END: Regex =
        Regex::new(r"^DTEND(?:;TZID=[^:]*)?:([0-9]{4})([0-9]{2})([0-9]{2})T([0-9]{2})([0-9]{2})([0-9]{2})").unwrap();
    static ref UNTIMED_END: Regex =
        Regex::new(r"^DTEND;VALUE=DATE:([0-9]{4})([0-9]{2})([0-9]{2})").unwrap();
}

/// A recognised content line, borrowing its text from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property<'a> {
    BeginEvent,
    EndEvent,
    /// `BEGIN` of any other component, e.g. a `VALARM` nested in an event.
    BeginOther,
    EndOther,
    TimedStart(DateValue, TimeValue),
    UntimedStart(DateValue),
    TimedEnd(DateValue, TimeValue),
    UntimedEnd(DateValue),
    /// Remainder of the line, leading escaped newlines already stripped.
    Description(&'a str),
    Summary(&'a str),
    Location(&'a str),
    Status(&'a str),
}

impl<'a> Property<'a> {
    pub fn recognize(line: &'a str) -> Option<Self> {
        if line.starts_with(BEGIN_EVENT) {
            return Some(Self::BeginEvent);
        }
        if line.starts_with(END_EVENT) {
            return Some(Self::EndEvent);
        }
        if line.starts_with(BEGIN) {
            return Some(Self::BeginOther);
        }
        if line.starts_with(END) {
            return Some(Self::EndOther);
        }

        if let Some(caps) = TIMED_START.captures(line) {
            return Some(Self::TimedStart(date(&caps)?, time(&caps)?));
        }
        if let Some(caps) = UNTIMED_START.captures(line) {
            return Some(Self::UntimedStart(date(&caps)?));
        }
        if let Some(caps) = TIMED_END.captures(line) {
            return Some(Self::TimedEnd(date(&caps)?, time(&caps)?));
        }
        if let Some(caps) = UNTIMED_END.captures(line) {
            return Some(Self::UntimedEnd(date(&caps)?));
        }

        if let Some(text) = line.strip_prefix(DESCRIPTION) {
            return Some(Self::Description(text.trim_start_matches("\\n")));
        }
        if let Some(text) = line.strip_prefix(SUMMARY) {
            return Some(Self::Summary(text));
        }
        if let Some(text) = line.strip_prefix(LOCATION) {
            return Some(Self::Location(text));
        }
        line.strip_prefix(STATUS).map(Self::Status)
    }
}

fn date(caps: &Captures) -> Option<DateValue> {
    Some(DateValue {
        year: caps[1].parse().ok()?,
        month: caps[2].parse().ok()?,
        day: caps[3].parse().ok()?,
    })
}

fn time(caps: &Captures) -> Option<TimeValue> {
    Some(TimeValue {
        hour: caps[4].parse().ok()?,
        minute: caps[5].parse().ok()?,
        second: caps[6].parse().ok()?,
    })
}
