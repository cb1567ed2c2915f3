use crate::types::{DateValue, TimeValue};

/// The accumulated state of one `VEVENT` block.
///
/// A record only has meaning between `BEGIN:VEVENT` and the matching `END:VEVENT`. It is
/// reset to its `Default` at both boundaries; nothing is carried from one event to the
/// next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    /// Unescaped and quote-doubled.
    pub summary: String,
    pub start_date: Option<DateValue>,
    pub end_date: Option<DateValue>,
    pub start_time: Option<TimeValue>,
    pub end_time: Option<TimeValue>,
    /// Unescaped and quote-doubled once the continuation lines are complete.
    pub description: String,
    pub location: String,
    pub status: String,
    /// The start date was given in date-only form, so any end date is dropped.
    pub is_untimed_start: bool,
    /// Set once a start date inside the configured range has been seen.
    pub in_range: bool,
}

impl EventRecord {
    pub fn set_start(&mut self, date: Option<(DateValue, TimeValue)>) {
        (self.start_date, self.start_time) = date.unzip();
    }

    pub fn set_end(&mut self, date: DateValue, time: TimeValue) {
        self.end_date = Some(date);
        self.end_time = Some(time);
    }
}
