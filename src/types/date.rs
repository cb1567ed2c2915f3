use derive_more::Display;

/// A calendar date as written in the source, e.g. `20171225`.
///
/// No validity checking is performed: the digit groups are taken verbatim, so a
/// `DateValue` may well describe the 31st of February.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display("{day}/{month}/{year}")]
pub struct DateValue {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl DateValue {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// The date packed as a `yyyymmdd` integer.
    #[inline]
    pub fn packed(&self) -> u32 {
        u32::from(self.year) * 10_000 + u32::from(self.month) * 100 + u32::from(self.day)
    }
}

/// A time of day; `0:0:0` for dates given without a time component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display("{hour}:{minute}:{second}")]
pub struct TimeValue {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeValue {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}
