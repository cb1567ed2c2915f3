mod date;
pub use date::{DateValue, TimeValue};

mod range;
pub use range::{DateRange, RangeError};
